//! Human keeper control and the shared intent/dive application
//!
//! Dives are timed against the wall clock (read once per tick) rather than
//! frame counts, so they feel identical regardless of tick spacing. The
//! lunge follows a half-sine distance profile with the hands reaching
//! beyond the body, then a short recovery window holds position before the
//! next dive command is accepted.

use bevy::prelude::*;

use crate::ball::{Ball, BallFlight, Velocity};
use crate::constants::{DIVE_SPEED_BONUS_CAP, DIVE_SPEED_BONUS_SCALE, KEEPER_BODY_WIDTH,
    KEEPER_WALK_SPEED};
use crate::events::{EventBus, GameEvent};
use crate::field::FieldGeometry;
use crate::helpers::move_toward;
use crate::input::KeeperInput;
use crate::keeper::components::*;
use crate::match_flow::MatchState;
use crate::tuning::PhysicsTweaks;

/// Half-sine lunge distance for a dive progress in [0, 1]
pub fn dive_offset(progress: f32, max_distance: f32, speed_bonus: f32) -> f32 {
    max_distance * (progress * std::f32::consts::PI).sin() * speed_bonus
}

/// Faster shots stretch the dive further, up to a cap
pub fn speed_bonus(ball_speed: f32) -> f32 {
    (1.0 + ball_speed / DIVE_SPEED_BONUS_SCALE).min(DIVE_SPEED_BONUS_CAP)
}

/// Decide the intent for the human-controlled keeper. Dive presses arriving
/// mid-dive are consumed and dropped.
pub fn keeper_decide_human(
    mut input: ResMut<KeeperInput>,
    state: Res<MatchState>,
    mut bus: ResMut<EventBus>,
    mut query: Query<(&DiveState, &mut DiveIntent), (With<Keeper>, With<HumanControlled>)>,
) {
    let dive_command = input.dive.take();

    for (dive_state, mut intent) in &mut query {
        if let Some(direction) = dive_command {
            if dive_state.ready() {
                bus.emit(GameEvent::Dive {
                    keeper: state.keeper_role(),
                    direction: direction.label().to_string(),
                });
                *intent = DiveIntent::StartDive(direction);
                continue;
            }
        }
        *intent = DiveIntent::Walk(input.walk_dir * KEEPER_WALK_SPEED);
    }
}

/// Apply the decided intent and advance any running dive. Consumed
/// uniformly for both controllers.
pub fn keeper_apply_intent(
    time: Res<Time<Real>>,
    tweaks: Res<PhysicsTweaks>,
    geom: Res<FieldGeometry>,
    mut keeper_query: Query<
        (
            &mut Transform,
            &mut KeeperBody,
            &mut DiveState,
            &mut HandPosition,
            &DiveIntent,
        ),
        With<Keeper>,
    >,
    ball_query: Query<(&Velocity, &BallFlight), With<Ball>>,
) {
    let now = time.elapsed_secs();
    let real_delta = time.delta_secs();
    let ball_speed = ball_query
        .single()
        .map(|(v, flight)| if flight.in_flight { v.0.length() } else { 0.0 })
        .unwrap_or(0.0);
    let (span_lo, span_hi) = geom.keeper_span(KEEPER_BODY_WIDTH / 2.0);

    for (mut transform, mut body, mut dive, mut hand, intent) in &mut keeper_query {
        match *intent {
            DiveIntent::Hold => {}
            DiveIntent::Track { target_x, .. } => {
                body.target_x = target_x.clamp(span_lo, span_hi);
                transform.translation.x =
                    move_toward(transform.translation.x, body.target_x, body.speed);
            }
            DiveIntent::StartDive(direction) => {
                if dive.ready() && direction != DiveDirection::None {
                    dive.active = true;
                    dive.direction = direction;
                    dive.started_at = now;
                    dive.origin = transform.translation.truncate();
                }
            }
            DiveIntent::Walk(dx) => {
                if dive.ready() {
                    transform.translation.x =
                        (transform.translation.x + dx).clamp(-geom.half_width, geom.half_width);
                }
            }
        }

        if dive.active {
            let progress = (now - dive.started_at) / tweaks.dive_duration;
            if progress >= 1.0 {
                // Lunge finished: hold position, accept no dive until the
                // recovery window passes
                dive.active = false;
                dive.recovering = true;
                dive.recovery_elapsed = 0.0;
            } else {
                let reach = dive.direction.unit();
                let offset = dive_offset(progress, tweaks.dive_max_distance, speed_bonus(ball_speed));
                let pos = dive.origin + reach * offset;
                let pos = clamp_keeper(pos, &geom);
                transform.translation.x = pos.x;
                transform.translation.y = pos.y;

                let reach_dist = tweaks.dive_hand_reach * (progress * std::f32::consts::PI).sin();
                hand.0 = clamp_keeper(pos + reach * reach_dist, &geom);
                continue;
            }
        }

        if dive.recovering {
            dive.recovery_elapsed += real_delta;
            if dive.recovery_elapsed >= tweaks.dive_recovery {
                dive.cancel();
            }
        }

        // Not mid-lunge: hands rest at the body
        hand.0 = transform.translation.truncate();
    }
}

/// Keepers stay in the field laterally and in the goal half vertically
fn clamp_keeper(pos: Vec2, geom: &FieldGeometry) -> Vec2 {
    Vec2::new(
        pos.x.clamp(-geom.half_width, geom.half_width),
        pos.y.clamp(0.0, geom.half_height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lunge_profile_peaks_mid_dive() {
        assert!(dive_offset(0.0, 100.0, 1.0).abs() < 1e-4);
        assert!((dive_offset(1.0, 100.0, 1.0)).abs() < 1e-3);
        let mid = dive_offset(0.5, 100.0, 1.0);
        assert!((mid - 100.0).abs() < 1e-3);
        assert!(dive_offset(0.25, 100.0, 1.0) < mid);
    }

    #[test]
    fn test_speed_bonus_caps() {
        assert!((speed_bonus(0.0) - 1.0).abs() < 1e-5);
        assert!(speed_bonus(4.0) > 1.0);
        assert_eq!(speed_bonus(1000.0), DIVE_SPEED_BONUS_CAP);
    }

    #[test]
    fn test_dive_state_readiness() {
        let mut dive = DiveState::default();
        assert!(dive.ready());
        dive.active = true;
        assert!(!dive.ready());
        dive.active = false;
        dive.recovering = true;
        assert!(!dive.ready());
        dive.cancel();
        assert!(dive.ready());
    }
}
