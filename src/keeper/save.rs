//! Shared save hit-test for both keeper controllers
//!
//! Runs every tick while a kicker shot is in flight: a rectangular body
//! footprint (inflated while reacting/diving) plus, for human keepers, a
//! circular hand-reach check. A hit deflects the ball with restitution and
//! a little random scatter, pushes it clear of the footprint, and marks the
//! shot as saved. Serves and already-saved rebounds are never re-saved.

use bevy::prelude::*;
use rand::Rng;

use crate::ball::{Ball, BallFlight, BallSpin, Velocity};
use crate::constants::*;
use crate::events::{EventBus, GameEvent};
use crate::helpers::{contact_normal, deflect_with_jitter, tangential_spin};
use crate::keeper::components::*;
use crate::match_flow::MatchState;
use crate::tuning::PhysicsTweaks;

/// Whether a ball center is inside a footprint rectangle
pub fn footprint_hit(ball_pos: Vec2, center: Vec2, size: Vec2) -> bool {
    (ball_pos.x - center.x).abs() < size.x / 2.0 && (ball_pos.y - center.y).abs() < size.y / 2.0
}

/// Deflect a saved ball off a footprint. Returns the repositioned ball
/// center, pushed just outside the footprint along the contact normal.
pub fn resolve_save(
    ball_pos: Vec2,
    velocity: &mut Vec2,
    spin: &mut f32,
    center: Vec2,
    half_extents: Vec2,
    tweaks: &PhysicsTweaks,
    rng: &mut impl Rng,
) -> Vec2 {
    let normal = contact_normal(ball_pos - center, Vec2::NEG_Y);
    *velocity = deflect_with_jitter(
        *velocity,
        normal,
        tweaks.save_restitution,
        tweaks.save_jitter_degrees,
        rng,
    );
    *spin = tangential_spin(*velocity, normal, tweaks.save_spin_transfer)
        .clamp(-tweaks.save_max_spin, tweaks.save_max_spin);
    center
        + Vec2::new(
            normal.x * (half_extents.x + BALL_RADIUS + SAVE_SEPARATION),
            normal.y * (half_extents.y + BALL_RADIUS + SAVE_SEPARATION),
        )
}

/// Per-tick save check. Must run before goal detection so a save and a goal
/// can never fire for the same shot.
pub fn keeper_block_shots(
    tweaks: Res<PhysicsTweaks>,
    state: Res<MatchState>,
    mut bus: ResMut<EventBus>,
    mut keeper_query: Query<
        (
            &Transform,
            &mut KeeperReaction,
            &mut DiveState,
            &HandPosition,
            Option<&HumanControlled>,
        ),
        With<Keeper>,
    >,
    mut ball_query: Query<
        (&mut Transform, &mut Velocity, &mut BallSpin, &mut BallFlight),
        (With<Ball>, Without<Keeper>),
    >,
) {
    let Ok((mut ball_transform, mut velocity, mut spin, mut flight)) = ball_query.single_mut()
    else {
        return;
    };
    if !flight.in_flight || !flight.shot_by_kicker {
        return;
    }
    let ball_pos = ball_transform.translation.truncate();
    let mut rng = rand::thread_rng();

    for (transform, mut reaction, mut dive, hand, human) in &mut keeper_query {
        let body_pos = transform.translation.truncate();

        // Footprint grows while the keeper is committed to a stop
        let (center, size) = if human.is_some() {
            let size = if dive.active {
                KEEPER_DIVING_FOOTPRINT
            } else {
                KEEPER_STANDING_FOOTPRINT
            };
            (body_pos, size)
        } else if reaction.reacting {
            let offset = Vec2::new(
                KEEPER_DIVE_OFFSET.x * reaction.dive.unit().x,
                KEEPER_DIVE_OFFSET.y,
            );
            (body_pos + offset, KEEPER_DIVING_FOOTPRINT)
        } else {
            (body_pos, KEEPER_STANDING_FOOTPRINT)
        };

        let body_hit = footprint_hit(ball_pos, center, size);
        let hand_hit = human.is_some()
            && dive.active
            && ball_pos.distance(hand.0) < KEEPER_HAND_RADIUS + BALL_RADIUS;

        if !body_hit && !hand_hit {
            continue;
        }

        let new_pos = if body_hit {
            resolve_save(
                ball_pos,
                &mut velocity.0,
                &mut spin.0,
                center,
                size / 2.0,
                &tweaks,
                &mut rng,
            )
        } else {
            resolve_save(
                ball_pos,
                &mut velocity.0,
                &mut spin.0,
                hand.0,
                Vec2::splat(KEEPER_HAND_RADIUS),
                &tweaks,
                &mut rng,
            )
        };
        ball_transform.translation.x = new_pos.x;
        ball_transform.translation.y = new_pos.y;

        // Rebounds are no longer the kicker's shot; the outcome machine
        // consumes just_saved exactly once
        flight.shot_by_kicker = false;
        flight.just_saved = true;
        reaction.cancel();
        dive.cancel();

        bus.emit(GameEvent::Save {
            keeper: state.keeper_role(),
            hand: hand_hit && !body_hit,
        });
        info!("{} save!", state.keeper_role());
        return;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footprint_hit_edges() {
        let size = Vec2::new(60.0, 60.0);
        assert!(footprint_hit(Vec2::new(10.0, -10.0), Vec2::ZERO, size));
        assert!(!footprint_hit(Vec2::new(31.0, 0.0), Vec2::ZERO, size));
        assert!(!footprint_hit(Vec2::new(0.0, 31.0), Vec2::ZERO, size));
    }

    #[test]
    fn test_save_dissipates_energy() {
        let tweaks = PhysicsTweaks::default();
        let mut rng = rand::thread_rng();
        let mut velocity = Vec2::new(0.0, 14.0);
        let mut spin = 0.0;
        let pre_speed = velocity.length();
        resolve_save(
            Vec2::new(0.0, -20.0),
            &mut velocity,
            &mut spin,
            Vec2::ZERO,
            KEEPER_STANDING_FOOTPRINT / 2.0,
            &tweaks,
            &mut rng,
        );
        // Jitter only rotates the deflection; the speed is exactly scaled
        assert!((velocity.length() - pre_speed * tweaks.save_restitution).abs() < 1e-3);
    }

    #[test]
    fn test_save_repositions_outside_footprint() {
        let tweaks = PhysicsTweaks::default();
        let mut rng = rand::thread_rng();
        let mut velocity = Vec2::new(2.0, 10.0);
        let mut spin = 0.2;
        let half = KEEPER_STANDING_FOOTPRINT / 2.0;
        let new_pos = resolve_save(
            Vec2::new(5.0, -12.0),
            &mut velocity,
            &mut spin,
            Vec2::ZERO,
            half,
            &tweaks,
            &mut rng,
        );
        assert!(!footprint_hit(new_pos, Vec2::ZERO, KEEPER_STANDING_FOOTPRINT));
    }

    #[test]
    fn test_save_spin_is_clamped() {
        let tweaks = PhysicsTweaks::default();
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let mut velocity = Vec2::new(60.0, -60.0);
            let mut spin = 0.0;
            resolve_save(
                Vec2::new(-10.0, -18.0),
                &mut velocity,
                &mut spin,
                Vec2::ZERO,
                KEEPER_STANDING_FOOTPRINT / 2.0,
                &tweaks,
                &mut rng,
            );
            assert!(spin.abs() <= tweaks.save_max_spin + 1e-5);
        }
    }
}
