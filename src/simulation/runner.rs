//! Headless shootout runner
//!
//! Builds a minimal app with the same FixedUpdate pipeline the game uses,
//! registered under `Update` so one `app.update()` is exactly one tick, and
//! drives it with a scripted kicker until the match resolves.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ball::{Ball, BallFlight, BallSpin, Velocity, ball_flight_update, try_kick};
use crate::constants::*;
use crate::events::{EventBus, GameEvent};
use crate::field::FieldGeometry;
use crate::keeper::{
    DiveIntent, DiveState, HandPosition, Keeper, KeeperBody, KeeperReaction,
    keeper_apply_intent, keeper_block_shots, keeper_decide_autonomous,
};
use crate::kicker::{AimAngle, ChargingKick, Kicker};
use crate::match_flow::{
    MatchPhase, MatchState, OutcomeBanner, evaluate_outcome, match_active, perform_reset,
    tick_outcome_banner,
};
use crate::settings::{Difficulty, GameMode};
use crate::tuning::PhysicsTweaks;

use super::config::SimConfig;
use super::metrics::MatchResult;

/// Safety cap so a wedged match can never spin forever
const MAX_FRAMES: u64 = 100_000;

/// Scripted kicker state: waits a few ticks between shots, then fires at a
/// randomized target inside the goal mouth.
#[derive(Resource)]
pub struct ShotScript {
    rng: StdRng,
    wait_frames: u32,
}

impl ShotScript {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            wait_frames: 10,
        }
    }
}

/// Fire a scripted shot once the wait expires
pub fn scripted_kick(
    tweaks: Res<PhysicsTweaks>,
    mut script: ResMut<ShotScript>,
    mut state: ResMut<MatchState>,
    mut bus: ResMut<EventBus>,
    mut ball_query: Query<(&mut Velocity, &mut BallSpin, &mut BallFlight), With<Ball>>,
) {
    if state.phase != MatchPhase::AwaitingShot {
        return;
    }
    if script.wait_frames > 0 {
        script.wait_frames -= 1;
        return;
    }

    let Ok((mut velocity, mut spin, mut flight)) = ball_query.single_mut() else {
        return;
    };

    // Aim somewhere between the posts as seen from the spot
    let angle = script.rng.gen_range(-118.0..-62.0);
    let power = script.rng.gen_range(0.75..1.0) * tweaks.kick_power_scale;
    if try_kick(&mut flight, &mut velocity.0, &mut spin.0, power, angle, &tweaks) {
        state.phase = MatchPhase::InFlight;
        bus.emit(GameEvent::ShotRelease {
            role: state.kicker,
            power,
            angle,
            spin: spin.0,
        });
        script.wait_frames = script.rng.gen_range(5..20);
    }
}

/// Build a headless app with the full gameplay pipeline and one of each
/// entity. Also used by integration tests.
pub fn build_headless_app(difficulty: Difficulty, max_shots: u32) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);

    app.init_resource::<OutcomeBanner>();
    app.insert_resource(ShotScript::seeded(0));
    app.insert_resource(PhysicsTweaks::default());
    app.insert_resource(FieldGeometry::default());
    app.insert_resource(MatchState::new(GameMode::SingleKicker, difficulty, max_shots));
    app.insert_resource(EventBus::new());

    let geom = FieldGeometry::default();
    app.world_mut().spawn((
        Ball,
        Velocity::default(),
        BallSpin::default(),
        BallFlight::default(),
        Transform::from_translation(BALL_SPAWN),
    ));
    app.world_mut().spawn((
        Kicker,
        AimAngle::default(),
        ChargingKick::default(),
        Transform::from_translation(KICKER_SPAWN),
    ));
    app.world_mut().spawn((
        Keeper,
        KeeperBody::new(difficulty.keeper_speed(), geom.goal_x + geom.goal_width / 2.0),
        KeeperReaction::default(),
        DiveState::default(),
        HandPosition(KEEPER_SPAWN.truncate()),
        DiveIntent::default(),
        Transform::from_translation(KEEPER_SPAWN),
    ));

    // Same tick order as the game, one app.update() per tick
    app.add_systems(
        Update,
        (
            scripted_kick,
            keeper_decide_autonomous,
            keeper_apply_intent,
            keeper_block_shots,
            ball_flight_update,
            evaluate_outcome,
            tick_outcome_banner,
            perform_reset,
        )
            .chain()
            .run_if(match_active),
    );

    app
}

/// Run a single shootout and tally its outcomes
pub fn run_match(config: &SimConfig, seed: u64) -> MatchResult {
    let mut app = build_headless_app(config.difficulty, config.max_shots);
    app.insert_resource(ShotScript::seeded(seed));

    let mut result = MatchResult {
        seed,
        difficulty: config.difficulty.label().to_string(),
        shots: 0,
        goals: 0,
        saves: 0,
        misses: 0,
        frames: 0,
    };

    for frame in 0..MAX_FRAMES {
        app.update();
        result.frames = frame + 1;

        for bus_event in app.world_mut().resource_mut::<EventBus>().drain() {
            match bus_event.event {
                GameEvent::Goal { .. } => result.goals += 1,
                GameEvent::Save { .. } => result.saves += 1,
                GameEvent::Miss { .. } => result.misses += 1,
                _ => {}
            }
        }

        if app.world().resource::<MatchState>().phase == MatchPhase::GameOver {
            break;
        }
    }

    let state = app.world().resource::<MatchState>();
    result.shots = state.shots_taken;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shootout_resolves_every_shot() {
        let config = SimConfig {
            matches: 1,
            max_shots: 3,
            ..Default::default()
        };
        let result = run_match(&config, 7);
        assert_eq!(result.shots, 3);
        // Every shot resolves as exactly one of goal, save, or miss
        assert_eq!(result.goals + result.saves + result.misses, 3);
        assert!(result.frames < MAX_FRAMES);
    }

    #[test]
    fn test_shootout_reaches_game_over() {
        let config = SimConfig {
            max_shots: 2,
            difficulty: Difficulty::Easy,
            ..Default::default()
        };
        let result = run_match(&config, 99);
        assert_eq!(result.shots, 2);
    }
}
