//! Tunable constants for spotkick
//!
//! All gameplay values are defined here for easy tweaking.

use bevy::prelude::*;

// =============================================================================
// TEXT/UI COLORS
// =============================================================================

pub const TEXT_PRIMARY: Color = Color::srgb(0.95, 0.95, 0.9); // Chalk white
pub const TEXT_GOAL: Color = Color::srgb(1.0, 0.84, 0.0); // Gold
pub const TEXT_MISS: Color = Color::srgb(0.9, 0.1, 0.1); // Red

// Alternating pitch stripe greens
pub const PITCH_STRIPE_A: Color = Color::srgb(0.039, 0.631, 0.086);
pub const PITCH_STRIPE_B: Color = Color::srgb(0.047, 0.651, 0.094);
pub const LINE_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);

// =============================================================================
// FIELD DIMENSIONS
// =============================================================================

/// Scale factor between real-world yards and field units
pub const PIXELS_PER_YARD: f32 = 13.33;

pub const FIELD_WIDTH: f32 = 800.0;
pub const FIELD_HEIGHT: f32 = 800.0;
pub const FIELD_HALF_W: f32 = FIELD_WIDTH / 2.0;
pub const FIELD_HALF_H: f32 = FIELD_HEIGHT / 2.0;

/// Ground band at the kicker's end of the field; low bounces resolve here
pub const GROUND_Y: f32 = -FIELD_HALF_H + 20.0;

// =============================================================================
// GOAL MOUTH
// =============================================================================

pub const GOAL_WIDTH: f32 = 8.0 * PIXELS_PER_YARD * 2.6;
/// How far the net region extends from the goal line into the field
pub const GOAL_NET_DEPTH: f32 = 2.67 * PIXELS_PER_YARD * 1.8;
/// Goal line sits on the top edge of the field
pub const GOAL_LINE_Y: f32 = FIELD_HALF_H;
pub const GOAL_X: f32 = -GOAL_WIDTH / 2.0;

pub const POST_INSET: f32 = 8.0;
pub const POST_RADIUS: f32 = 5.0;
pub const CROSSBAR_THICKNESS: f32 = 8.0;

// =============================================================================
// BALL PHYSICS (per FixedUpdate tick)
// =============================================================================

pub const BALL_RADIUS: f32 = 10.0;
pub const BALL_GRAVITY: f32 = 0.15; // Pull toward the kicker's end per tick
pub const BALL_DRAG: f32 = 0.0005; // Quadratic drag coefficient
pub const CURVE_COEFFICIENT: f32 = 0.05; // Spin-to-sideways-force factor
pub const CURVE_MIN_SPEED: f32 = 0.5; // No curve below this speed
pub const BALL_STOP_SPEED: f32 = 0.1; // Flight ends below this speed
pub const POST_RESTITUTION: f32 = 0.8;
pub const POST_SPIN_TRANSFER: f32 = 0.1; // Tangential velocity to spin
pub const CROSSBAR_RESTITUTION: f32 = 0.8;
pub const GROUND_RESTITUTION: f32 = 0.6;
pub const GROUND_FRICTION: f32 = 0.8; // Horizontal velocity kept per bounce

// =============================================================================
// KICKING
// =============================================================================

pub const KICK_POWER_SCALE: f32 = 15.0; // Full-charge launch speed
pub const KICK_SPIN_FACTOR: f32 = 0.02; // Spin per degree of off-axis aim
pub const KICK_DISTANCE: f32 = 36.0; // Max kicker-to-ball reach
pub const CHARGE_RATE: f32 = 0.02; // Power gained per tick while charging
pub const AIM_MIN_DEGREES: f32 = -180.0;
pub const AIM_MAX_DEGREES: f32 = 0.0;
pub const AIM_BASE_SPEED: f32 = 2.0; // Degrees per tick when tapping
pub const AIM_ACCELERATION: f32 = 0.1; // Ramp while held
pub const AIM_MAX_SPEED: f32 = 5.0;
pub const KICKER_MOVE_SPEED: f32 = 2.0;
pub const KICKER_SPOT_OFFSET: f32 = 50.0; // Kicker stands this far behind the spot

// =============================================================================
// PENALTY SPOT
// =============================================================================

pub const PENALTY_SPOT_X: f32 = 0.0;
pub const PENALTY_SPOT_Y: f32 = FIELD_HALF_H - 20.0 * PIXELS_PER_YARD;
pub const PENALTY_AREA_WIDTH: f32 = 50.0 * PIXELS_PER_YARD;
pub const PENALTY_AREA_DEPTH: f32 = 25.0 * PIXELS_PER_YARD;

// =============================================================================
// GOALKEEPER
// =============================================================================

pub const KEEPER_Y: f32 = FIELD_HALF_H - 50.0;
pub const KEEPER_BODY_WIDTH: f32 = 20.0; // Used for goal-span clamping
pub const KEEPER_STANDING_FOOTPRINT: Vec2 = Vec2::new(60.0, 60.0);
pub const KEEPER_DIVING_FOOTPRINT: Vec2 = Vec2::new(110.0, 80.0);
/// Collision-center offset while an autonomous keeper dives (x toward the
/// dive side, y toward the goal line)
pub const KEEPER_DIVE_OFFSET: Vec2 = Vec2::new(36.0, 24.0);
pub const KEEPER_HAND_RADIUS: f32 = 22.0;
pub const KEEPER_CENTER_DEADZONE: f32 = 12.0; // Central shots get no dive

pub const SAVE_RESTITUTION: f32 = 0.7;
pub const SAVE_JITTER_DEGREES: f32 = 10.0; // Imperfect-save scatter
pub const SAVE_SPIN_TRANSFER: f32 = 0.03;
pub const SAVE_MAX_SPIN: f32 = 0.7;
pub const SAVE_SEPARATION: f32 = 2.0; // Gap left between ball and footprint

/// How many flight steps the keeper may simulate when predicting a shot
pub const PREDICT_MAX_STEPS: u32 = 90;

// Difficulty tables: lateral speed (units per tick) and reaction delay
// (base frames, +/- jitter frames)
pub const KEEPER_SPEED_EASY: f32 = 3.0;
pub const KEEPER_SPEED_MEDIUM: f32 = 5.0;
pub const KEEPER_SPEED_HARD: f32 = 7.5;
pub const REACTION_FRAMES_EASY: (u32, u32) = (18, 6);
pub const REACTION_FRAMES_MEDIUM: (u32, u32) = (10, 4);
pub const REACTION_FRAMES_HARD: (u32, u32) = (4, 2);

// =============================================================================
// HUMAN DIVES (wall-clock timed)
// =============================================================================

pub const KEEPER_WALK_SPEED: f32 = 5.0;
pub const DIVE_DURATION_SECS: f32 = 0.3;
pub const DIVE_RECOVERY_SECS: f32 = 0.2; // Hold position before next dive
pub const DIVE_MAX_DISTANCE: f32 = 100.0;
pub const DIVE_HAND_REACH: f32 = 30.0;
pub const DIVE_SPEED_BONUS_CAP: f32 = 1.5; // Faster shots stretch the dive
pub const DIVE_SPEED_BONUS_SCALE: f32 = 10.0;

// =============================================================================
// KEEPER SERVE (restart after dead ball)
// =============================================================================

pub const SERVE_OFFSET: f32 = 10.0; // Random placement around the keeper
pub const SERVE_ANGLE_MIN: f32 = 30.0; // Degrees, downfield arc
pub const SERVE_ANGLE_MAX: f32 = 150.0;
pub const SERVE_POWER_MIN: f32 = 3.0;
pub const SERVE_POWER_MAX: f32 = 7.0;

// =============================================================================
// MATCH FLOW
// =============================================================================

pub const DEFAULT_MAX_SHOTS: u32 = 5;
pub const OUTCOME_BANNER_FRAMES: u32 = 60;

// =============================================================================
// SPAWN POSITIONS
// =============================================================================

pub const BALL_SPAWN: Vec3 = Vec3::new(PENALTY_SPOT_X, PENALTY_SPOT_Y, 2.0);
pub const KICKER_SPAWN: Vec3 = Vec3::new(
    PENALTY_SPOT_X,
    PENALTY_SPOT_Y - KICKER_SPOT_OFFSET,
    1.0,
);
pub const KEEPER_SPAWN: Vec3 = Vec3::new(0.0, KEEPER_Y, 1.0);
