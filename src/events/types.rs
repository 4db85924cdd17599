//! Event type definitions for the logging system

use serde::{Deserialize, Serialize};

/// Player role identifier. In single-kicker mode only `One` kicks; in
/// two-role mode the roles trade kicker and keeper duties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    One,
    Two,
}

impl Role {
    pub fn other(self) -> Role {
        match self {
            Role::One => Role::Two,
            Role::Two => Role::One,
        }
    }

    /// Index into per-role score arrays
    pub fn index(self) -> usize {
        match self {
            Role::One => 0,
            Role::Two => 1,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::One => write!(f, "P1"),
            Role::Two => write!(f, "P2"),
        }
    }
}

/// Game configuration snapshot logged at session start
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameConfig {
    pub ball_gravity: f32,
    pub ball_drag: f32,
    pub curve_coefficient: f32,
    pub post_restitution: f32,
    pub ground_restitution: f32,
    pub kick_power_scale: f32,
    pub kick_spin_factor: f32,
    pub charge_rate: f32,
    pub save_restitution: f32,
    pub keeper_speed: f32,
    pub max_shots: u32,
}

/// All game events that can be logged
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameEvent {
    // === Session Events ===
    /// Session started (generated once per game launch)
    SessionStart {
        session_id: String, // UUID v4
        timestamp: String,  // ISO 8601
    },
    /// Configuration snapshot (logged after session start)
    Config(GameConfig),

    // === Match Events ===
    /// Match started
    MatchStart {
        mode: String,
        difficulty: String,
        max_shots: u32,
        seed: u64,
    },
    /// Match ended
    MatchEnd {
        score_one: u32,
        score_two: u32,
        shots: u32,
    },

    // === Shot Events ===
    /// Kicker released a charged shot
    ShotRelease {
        role: Role,
        power: f32,
        angle: f32,
        spin: f32,
    },
    /// Keeper deflected the shot
    Save {
        keeper: Role,
        hand: bool,
    },
    /// Shot crossed into the goal
    Goal {
        role: Role,
        score_one: u32,
        score_two: u32,
    },
    /// Shot went wide, over, or died on the field
    Miss {
        role: Role,
    },

    // === Keeper Events ===
    /// Keeper committed to a dive
    Dive {
        keeper: Role,
        direction: String,
    },

    // === Flow Events ===
    /// Kicker and keeper traded roles
    RoleSwap {
        kicker: Role,
    },
}

impl GameEvent {
    /// 2-char code used by the compact log format
    pub fn type_code(&self) -> &'static str {
        match self {
            GameEvent::SessionStart { .. } => "SS",
            GameEvent::Config(_) => "CF",
            GameEvent::MatchStart { .. } => "MS",
            GameEvent::MatchEnd { .. } => "ME",
            GameEvent::ShotRelease { .. } => "SR",
            GameEvent::Save { .. } => "SV",
            GameEvent::Goal { .. } => "G",
            GameEvent::Miss { .. } => "M",
            GameEvent::Dive { .. } => "DV",
            GameEvent::RoleSwap { .. } => "RS",
        }
    }
}
