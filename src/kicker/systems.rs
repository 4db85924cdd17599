//! Kicker systems - movement, aiming, charge, and the kick itself

use bevy::prelude::*;

use crate::ball::{Ball, BallFlight, BallSpin, Velocity, try_kick};
use crate::constants::*;
use crate::events::{EventBus, GameEvent};
use crate::field::FieldGeometry;
use crate::input::KickInput;
use crate::kicker::components::{AimAngle, ChargingKick, Kicker};
use crate::match_flow::{MatchPhase, MatchState};
use crate::tuning::PhysicsTweaks;

/// Walk the kicker around the field
pub fn kicker_move(
    input: Res<KickInput>,
    geom: Res<FieldGeometry>,
    mut query: Query<&mut Transform, With<Kicker>>,
) {
    for mut transform in &mut query {
        let pos = transform.translation.truncate() + input.move_dir * KICKER_MOVE_SPEED;
        let pos = geom.clamp_to_field(pos);
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;
    }
}

/// Adjust the aim angle; holding a direction ramps the aim speed up
pub fn aim_update(input: Res<KickInput>, mut query: Query<&mut AimAngle, With<Kicker>>) {
    for mut aim in &mut query {
        if input.aim_dir != 0.0 {
            aim.speed = (aim.speed + AIM_ACCELERATION).min(AIM_MAX_SPEED);
            aim.degrees += input.aim_dir * aim.speed;
        } else {
            aim.speed = AIM_BASE_SPEED;
        }
        aim.clamp();
    }
}

/// Build power while the charge button is held. Power climbs until release
/// or the cap, never down.
pub fn charge_update(
    input: Res<KickInput>,
    state: Res<MatchState>,
    tweaks: Res<PhysicsTweaks>,
    mut query: Query<&mut ChargingKick, With<Kicker>>,
) {
    if state.phase != MatchPhase::AwaitingShot {
        return;
    }
    for mut charging in &mut query {
        if input.charge_held {
            charging.charging = true;
            charging.power = (charging.power + tweaks.charge_rate).min(1.0);
        }
    }
}

/// Execute the kick when the charge button is released within reach of the
/// ball. An out-of-reach release just discards the charge.
pub fn kick_release(
    mut input: ResMut<KickInput>,
    mut state: ResMut<MatchState>,
    tweaks: Res<PhysicsTweaks>,
    mut bus: ResMut<EventBus>,
    mut kicker_query: Query<(&Transform, &AimAngle, &mut ChargingKick), With<Kicker>>,
    mut ball_query: Query<
        (&Transform, &mut Velocity, &mut BallSpin, &mut BallFlight),
        (With<Ball>, Without<Kicker>),
    >,
) {
    if !input.charge_released {
        return;
    }
    input.charge_released = false;

    for (kicker_transform, aim, mut charging) in &mut kicker_query {
        if !charging.charging {
            continue;
        }
        let power = charging.power;
        charging.charging = false;
        charging.power = 0.0;

        if state.phase != MatchPhase::AwaitingShot {
            continue;
        }

        let kicker_pos = kicker_transform.translation.truncate();
        for (ball_transform, mut velocity, mut spin, mut flight) in &mut ball_query {
            let ball_pos = ball_transform.translation.truncate();
            if kicker_pos.distance(ball_pos) >= KICK_DISTANCE {
                continue;
            }

            let launch_speed = power * tweaks.kick_power_scale;
            if try_kick(
                &mut flight,
                &mut velocity.0,
                &mut spin.0,
                launch_speed,
                aim.degrees,
                &tweaks,
            ) {
                state.phase = MatchPhase::InFlight;
                bus.emit(GameEvent::ShotRelease {
                    role: state.kicker,
                    power: launch_speed,
                    angle: aim.degrees,
                    spin: spin.0,
                });
                info!(
                    "{} shoots: power {:.1}, angle {:.0}",
                    state.kicker, launch_speed, aim.degrees
                );
            }
        }
    }
}
