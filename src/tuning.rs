//! Global gameplay tuning settings (decoupled from UI)
//!
//! Every physics magic number lives in one place so divergent hand-tuned
//! values cannot creep back into individual systems.

use bevy::log::{info, warn};
use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::constants::*;

// Serde default functions for dive fields added after the first config format
fn default_dive_duration() -> f32 {
    DIVE_DURATION_SECS
}
fn default_dive_recovery() -> f32 {
    DIVE_RECOVERY_SECS
}
fn default_dive_max_distance() -> f32 {
    DIVE_MAX_DISTANCE
}
fn default_dive_hand_reach() -> f32 {
    DIVE_HAND_REACH
}

/// Path to global gameplay tuning config
pub const GAMEPLAY_TUNING_FILE: &str = "config/gameplay_tuning.json";

/// Serializable tuning values stored in config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameplayTuning {
    pub ball_gravity: f32,
    pub ball_drag: f32,
    pub curve_coefficient: f32,
    pub curve_min_speed: f32,
    pub ball_stop_speed: f32,
    pub post_restitution: f32,
    pub crossbar_restitution: f32,
    pub ground_restitution: f32,
    pub ground_friction: f32,
    pub kick_power_scale: f32,
    pub kick_spin_factor: f32,
    pub charge_rate: f32,
    pub save_restitution: f32,
    pub save_jitter_degrees: f32,
    pub save_spin_transfer: f32,
    pub save_max_spin: f32,
    #[serde(default = "default_dive_duration")]
    pub dive_duration: f32,
    #[serde(default = "default_dive_recovery")]
    pub dive_recovery: f32,
    #[serde(default = "default_dive_max_distance")]
    pub dive_max_distance: f32,
    #[serde(default = "default_dive_hand_reach")]
    pub dive_hand_reach: f32,
}

impl Default for GameplayTuning {
    fn default() -> Self {
        Self {
            ball_gravity: BALL_GRAVITY,
            ball_drag: BALL_DRAG,
            curve_coefficient: CURVE_COEFFICIENT,
            curve_min_speed: CURVE_MIN_SPEED,
            ball_stop_speed: BALL_STOP_SPEED,
            post_restitution: POST_RESTITUTION,
            crossbar_restitution: CROSSBAR_RESTITUTION,
            ground_restitution: GROUND_RESTITUTION,
            ground_friction: GROUND_FRICTION,
            kick_power_scale: KICK_POWER_SCALE,
            kick_spin_factor: KICK_SPIN_FACTOR,
            charge_rate: CHARGE_RATE,
            save_restitution: SAVE_RESTITUTION,
            save_jitter_degrees: SAVE_JITTER_DEGREES,
            save_spin_transfer: SAVE_SPIN_TRANSFER,
            save_max_spin: SAVE_MAX_SPIN,
            dive_duration: default_dive_duration(),
            dive_recovery: default_dive_recovery(),
            dive_max_distance: default_dive_max_distance(),
            dive_hand_reach: default_dive_hand_reach(),
        }
    }
}

impl GameplayTuning {
    /// Load tuning from the config file, falling back to defaults
    pub fn load_or_default() -> Self {
        match fs::read_to_string(GAMEPLAY_TUNING_FILE) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(tuning) => {
                    info!("Loaded gameplay tuning from {}", GAMEPLAY_TUNING_FILE);
                    tuning
                }
                Err(e) => {
                    warn!("Failed to parse {}: {}, using defaults", GAMEPLAY_TUNING_FILE, e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn apply_to(&self, tweaks: &mut PhysicsTweaks) {
        tweaks.ball_gravity = self.ball_gravity;
        tweaks.ball_drag = self.ball_drag;
        tweaks.curve_coefficient = self.curve_coefficient;
        tweaks.curve_min_speed = self.curve_min_speed;
        tweaks.ball_stop_speed = self.ball_stop_speed;
        tweaks.post_restitution = self.post_restitution;
        tweaks.crossbar_restitution = self.crossbar_restitution;
        tweaks.ground_restitution = self.ground_restitution;
        tweaks.ground_friction = self.ground_friction;
        tweaks.kick_power_scale = self.kick_power_scale;
        tweaks.kick_spin_factor = self.kick_spin_factor;
        tweaks.charge_rate = self.charge_rate;
        tweaks.save_restitution = self.save_restitution;
        tweaks.save_jitter_degrees = self.save_jitter_degrees;
        tweaks.save_spin_transfer = self.save_spin_transfer;
        tweaks.save_max_spin = self.save_max_spin;
        tweaks.dive_duration = self.dive_duration;
        tweaks.dive_recovery = self.dive_recovery;
        tweaks.dive_max_distance = self.dive_max_distance;
        tweaks.dive_hand_reach = self.dive_hand_reach;
    }
}

/// Runtime physics values consumed by the simulation systems
#[derive(Resource, Debug, Clone)]
pub struct PhysicsTweaks {
    pub ball_gravity: f32,
    pub ball_drag: f32,
    pub curve_coefficient: f32,
    pub curve_min_speed: f32,
    pub ball_stop_speed: f32,
    pub post_restitution: f32,
    pub crossbar_restitution: f32,
    pub ground_restitution: f32,
    pub ground_friction: f32,
    pub kick_power_scale: f32,
    pub kick_spin_factor: f32,
    pub charge_rate: f32,
    pub save_restitution: f32,
    pub save_jitter_degrees: f32,
    pub save_spin_transfer: f32,
    pub save_max_spin: f32,
    pub dive_duration: f32,
    pub dive_recovery: f32,
    pub dive_max_distance: f32,
    pub dive_hand_reach: f32,
}

impl Default for PhysicsTweaks {
    fn default() -> Self {
        let mut tweaks = Self {
            ball_gravity: 0.0,
            ball_drag: 0.0,
            curve_coefficient: 0.0,
            curve_min_speed: 0.0,
            ball_stop_speed: 0.0,
            post_restitution: 0.0,
            crossbar_restitution: 0.0,
            ground_restitution: 0.0,
            ground_friction: 0.0,
            kick_power_scale: 0.0,
            kick_spin_factor: 0.0,
            charge_rate: 0.0,
            save_restitution: 0.0,
            save_jitter_degrees: 0.0,
            save_spin_transfer: 0.0,
            save_max_spin: 0.0,
            dive_duration: 0.0,
            dive_recovery: 0.0,
            dive_max_distance: 0.0,
            dive_hand_reach: 0.0,
        };
        GameplayTuning::default().apply_to(&mut tweaks);
        tweaks
    }
}

impl PhysicsTweaks {
    /// Tweaks seeded from the on-disk tuning file (game startup path)
    pub fn from_config() -> Self {
        let mut tweaks = Self::default();
        GameplayTuning::load_or_default().apply_to(&mut tweaks);
        tweaks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let tweaks = PhysicsTweaks::default();
        assert_eq!(tweaks.ball_gravity, BALL_GRAVITY);
        assert_eq!(tweaks.post_restitution, POST_RESTITUTION);
        assert_eq!(tweaks.kick_power_scale, KICK_POWER_SCALE);
        assert_eq!(tweaks.dive_duration, DIVE_DURATION_SECS);
    }

    #[test]
    fn test_tuning_json_missing_dive_fields() {
        // Configs written before the dive fields existed must still parse
        let json = r#"{
            "ball_gravity": 0.2, "ball_drag": 0.0005,
            "curve_coefficient": 0.05, "curve_min_speed": 0.5,
            "ball_stop_speed": 0.1, "post_restitution": 0.8,
            "crossbar_restitution": 0.8, "ground_restitution": 0.6,
            "ground_friction": 0.8, "kick_power_scale": 15.0,
            "kick_spin_factor": 0.02, "charge_rate": 0.02,
            "save_restitution": 0.7, "save_jitter_degrees": 10.0,
            "save_spin_transfer": 0.03, "save_max_spin": 0.7
        }"#;
        let tuning: GameplayTuning = serde_json::from_str(json).unwrap();
        assert_eq!(tuning.ball_gravity, 0.2);
        assert_eq!(tuning.dive_duration, DIVE_DURATION_SECS);
    }
}
