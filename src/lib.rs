//! Spotkick - a penalty-kick arcade game built with Bevy
//!
//! This crate provides all game components, resources, and systems
//! organized into modules.

// Core modules
pub mod constants;
pub mod events;
pub mod helpers;
pub mod settings;
pub mod simulation;
pub mod tuning;

// Game logic modules
pub mod ball;
pub mod field;
pub mod input;
pub mod keeper;
pub mod kicker;
pub mod match_flow;
pub mod ui;

// Re-export commonly used types for convenience
pub use ball::{
    Ball, BallFlight, BallSpin, FlightEnd, Velocity, ball_flight_update, ball_roll_visual,
    goal_contains, kick_velocity, predict_crossing_x, reset_to_spot, serve_from_keeper,
    step_flight, try_kick,
};
pub use constants::*;
pub use events::{BusEvent, EventBus, EventLogger, GameConfig, GameEvent, Role, serialize_event};
pub use field::{FieldGeometry, spawn_goal, spawn_pitch};
pub use helpers::*;
pub use input::{KeeperInput, KickInput, capture_input};
pub use keeper::{
    DiveDirection, DiveIntent, DiveState, HandPosition, HumanControlled, Keeper, KeeperBody,
    KeeperReaction, keeper_apply_intent, keeper_block_shots, keeper_decide_autonomous,
    keeper_decide_human,
};
pub use kicker::{
    AimAngle, ChargingKick, Kicker, aim_update, charge_update, kick_release, kicker_move,
};
pub use match_flow::{
    BannerKind, FlowAdvance, MatchPhase, MatchState, OutcomeBanner, ShotOutcome,
    classify_outcome, evaluate_outcome, match_active, perform_reset, tick_outcome_banner,
};
pub use settings::{CurrentSettings, Difficulty, GameMode, InitSettings, save_settings_system};
pub use simulation::{MatchResult, ShootoutSummary, SimConfig, run_batch, run_match};
pub use tuning::{GameplayTuning, PhysicsTweaks};
pub use ui::{
    ChargeGaugeBackground, ChargeGaugeFill, ScoreText, spawn_banner_text, spawn_charge_gauge,
    spawn_hud, update_aim_power_text, update_banner_text, update_charge_gauge, update_score_text,
};
