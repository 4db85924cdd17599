//! Autonomous goalkeeper controller
//!
//! Tracks back to goal center while the ball is dead, then reacts to a shot
//! after a randomized difficulty-dependent delay: predict where the flight
//! will cross the keeper's line (curve included) and commit to a dive
//! toward it.

use bevy::prelude::*;
use rand::Rng;

use crate::ball::{Ball, BallFlight, BallSpin, Velocity, predict_crossing_x};
use crate::constants::{KEEPER_BODY_WIDTH, KEEPER_CENTER_DEADZONE, PREDICT_MAX_STEPS};
use crate::events::{EventBus, GameEvent};
use crate::field::FieldGeometry;
use crate::keeper::components::*;
use crate::match_flow::MatchState;
use crate::settings::Difficulty;
use crate::tuning::PhysicsTweaks;

/// Sample a reaction delay in frames around the difficulty base
pub fn sample_reaction_frames(difficulty: Difficulty, rng: &mut impl Rng) -> u32 {
    let (base, jitter) = difficulty.reaction_frames();
    let low = base.saturating_sub(jitter);
    rng.gen_range(low..=base + jitter)
}

/// Dive direction for a predicted crossing point; central shots get none
pub fn choose_dive(predicted_x: f32, keeper_x: f32, deadzone: f32) -> DiveDirection {
    let diff = predicted_x - keeper_x;
    if diff.abs() <= deadzone {
        DiveDirection::None
    } else if diff > 0.0 {
        DiveDirection::Right
    } else {
        DiveDirection::Left
    }
}

/// Decide the intent for keepers without the HumanControlled marker
pub fn keeper_decide_autonomous(
    tweaks: Res<PhysicsTweaks>,
    geom: Res<FieldGeometry>,
    state: Res<MatchState>,
    mut bus: ResMut<EventBus>,
    mut keeper_query: Query<
        (&Transform, &mut KeeperReaction, &mut DiveIntent),
        (With<Keeper>, Without<HumanControlled>),
    >,
    ball_query: Query<(&Transform, &Velocity, &BallSpin, &BallFlight), With<Ball>>,
) {
    let Ok((ball_transform, ball_velocity, ball_spin, flight)) = ball_query.single() else {
        return;
    };
    let ball_pos = ball_transform.translation.truncate();
    let goal_center_x = geom.goal_x + geom.goal_width / 2.0;
    let (span_lo, span_hi) = geom.keeper_span(KEEPER_BODY_WIDTH / 2.0);

    for (transform, mut reaction, mut intent) in &mut keeper_query {
        let keeper_x = transform.translation.x;

        // Dead ball, or a serve the keeper started itself: walk back to
        // center and forget any reaction in progress
        if !flight.in_flight || !flight.shot_by_kicker {
            reaction.cancel();
            *intent = DiveIntent::Track {
                target_x: goal_center_x,
                dive: DiveDirection::None,
            };
            continue;
        }

        // Shot incoming: start the reaction countdown once
        if !reaction.reacting && reaction.waiting.is_none() {
            let frames = sample_reaction_frames(state.difficulty, &mut rand::thread_rng());
            reaction.waiting = Some(frames);
        }

        if let Some(frames) = reaction.waiting {
            if frames > 0 {
                reaction.waiting = Some(frames - 1);
                *intent = DiveIntent::Hold;
                continue;
            }
            // Delay elapsed: commit to a dive toward the predicted crossing
            reaction.waiting = None;
            reaction.reacting = true;
            let predicted = predict_crossing_x(
                ball_pos,
                ball_velocity.0,
                ball_spin.0,
                geom.keeper_y,
                PREDICT_MAX_STEPS,
                &tweaks,
            )
            .clamp(span_lo, span_hi);
            reaction.dive = choose_dive(predicted, keeper_x, KEEPER_CENTER_DEADZONE);
            bus.emit(GameEvent::Dive {
                keeper: state.keeper_role(),
                direction: reaction.dive.label().to_string(),
            });
            *intent = DiveIntent::Track {
                target_x: predicted,
                dive: reaction.dive,
            };
            continue;
        }

        // Mid-reaction: keep sliding toward the committed target
        if reaction.reacting {
            let predicted = predict_crossing_x(
                ball_pos,
                ball_velocity.0,
                ball_spin.0,
                geom.keeper_y,
                PREDICT_MAX_STEPS,
                &tweaks,
            )
            .clamp(span_lo, span_hi);
            *intent = DiveIntent::Track {
                target_x: predicted,
                dive: reaction.dive,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_central_shot_gets_no_dive() {
        assert_eq!(choose_dive(0.0, 0.0, 12.0), DiveDirection::None);
        assert_eq!(choose_dive(10.0, 0.0, 12.0), DiveDirection::None);
    }

    #[test]
    fn test_dive_follows_sign() {
        assert_eq!(choose_dive(80.0, 0.0, 12.0), DiveDirection::Right);
        assert_eq!(choose_dive(-80.0, 0.0, 12.0), DiveDirection::Left);
    }

    #[test]
    fn test_reaction_delay_within_jitter_band() {
        let mut rng = rand::thread_rng();
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let (base, jitter) = difficulty.reaction_frames();
            for _ in 0..100 {
                let frames = sample_reaction_frames(difficulty, &mut rng);
                assert!(frames >= base.saturating_sub(jitter));
                assert!(frames <= base + jitter);
            }
        }
    }
}
