//! Ball physics systems

use bevy::prelude::*;

use crate::ball::components::*;
use crate::ball::flight::{self, FlightEnd};
use crate::field::FieldGeometry;
use crate::tuning::PhysicsTweaks;

/// Advance the ball one tick while in flight. Runs in `FixedUpdate` after
/// the keeper's save check and before outcome evaluation.
pub fn ball_flight_update(
    tweaks: Res<PhysicsTweaks>,
    geom: Res<FieldGeometry>,
    mut query: Query<(&mut Transform, &mut Velocity, &mut BallSpin, &mut BallFlight), With<Ball>>,
) {
    for (mut transform, mut velocity, mut spin, mut flight) in &mut query {
        if !flight.in_flight {
            continue;
        }

        let mut pos = transform.translation.truncate();
        let end = flight::step_flight(&mut pos, &mut velocity.0, &mut spin.0, &tweaks, &geom);
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;

        match end {
            Some(FlightEnd::Settled) => {
                flight.in_flight = false;
            }
            Some(FlightEnd::OutOfBounds) => {
                flight.in_flight = false;
                flight.left_field = true;
            }
            None => {}
        }
    }
}

/// Roll the ball sprite with its horizontal motion. Pure presentation.
pub fn ball_roll_visual(
    mut query: Query<(&mut Transform, &Velocity, &BallFlight), With<Ball>>,
) {
    for (mut transform, velocity, flight) in &mut query {
        if flight.in_flight {
            transform.rotate_z(-velocity.0.x * 0.02);
        }
    }
}
