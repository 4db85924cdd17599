//! Ball-related components

use bevy::prelude::*;

/// Marker for the ball entity
#[derive(Component)]
pub struct Ball;

/// 2D velocity vector - shared by ball and kicker
#[derive(Component, Default, Debug, Clone, Copy)]
pub struct Velocity(pub Vec2);

/// Signed spin scalar driving the curve force (positive bends one way,
/// negative the other)
#[derive(Component, Default, Debug, Clone, Copy)]
pub struct BallSpin(pub f32);

/// Flight bookkeeping consumed by the outcome machine.
///
/// Velocity and spin are zero whenever `in_flight` is false.
#[derive(Component, Default, Debug, Clone, Copy)]
pub struct BallFlight {
    /// Ball is between a kick/serve and settling, scoring, or leaving bounds
    pub in_flight: bool,
    /// Shot directly by the kicker; restarts/serves and saved rebounds are
    /// ineligible for save and goal attribution
    pub shot_by_kicker: bool,
    /// Set by the keeper on a save, consumed once by the outcome machine
    pub just_saved: bool,
    /// Flight ended by leaving the field bounds
    pub left_field: bool,
}

impl BallFlight {
    /// Clear every flag; used when the ball is repositioned for a restart
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
