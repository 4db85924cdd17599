//! Kicker-related components

use bevy::prelude::*;

use crate::constants::{AIM_BASE_SPEED, AIM_MAX_DEGREES, AIM_MIN_DEGREES};

/// Marker for the kicking player entity
#[derive(Component)]
pub struct Kicker;

/// Aim state. Angle 0 points along +x, -90 straight at the goal; the arc is
/// clamped to the forward cone.
#[derive(Component)]
pub struct AimAngle {
    pub degrees: f32,
    /// Current aim speed; ramps up while an aim key is held
    pub speed: f32,
}

impl Default for AimAngle {
    fn default() -> Self {
        Self {
            degrees: -90.0,
            speed: AIM_BASE_SPEED,
        }
    }
}

impl AimAngle {
    pub fn clamp(&mut self) {
        self.degrees = self.degrees.clamp(AIM_MIN_DEGREES, AIM_MAX_DEGREES);
    }
}

/// Kick power accumulator. Power only grows while charging, until release
/// or the cap.
#[derive(Component, Default)]
pub struct ChargingKick {
    pub charging: bool,
    /// Normalized power in [0, 1]
    pub power: f32,
}
