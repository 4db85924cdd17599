//! Match flow - outcome arbitration, shot counting, role swap, game over
//!
//! One aggregate owns every match-level counter and the phase machine:
//! `AwaitingShot -> InFlight -> Resetting -> AwaitingShot`, terminal
//! `GameOver`. The per-frame evaluation order is fixed: a save beats a goal
//! beats a miss, and exactly one outcome resolves each physical shot.

use bevy::prelude::*;

use crate::ball::{Ball, BallFlight, BallSpin, Velocity, goal_contains, reset_to_spot};
use crate::constants::{KICKER_SPOT_OFFSET, OUTCOME_BANNER_FRAMES};
use crate::events::{EventBus, GameEvent, Role};
use crate::field::FieldGeometry;
use crate::keeper::{DiveState, HandPosition, Keeper, KeeperBody, KeeperReaction};
use crate::kicker::{ChargingKick, Kicker};
use crate::settings::{Difficulty, GameMode};

/// Match phase. `Resetting` lasts one tick: entities are repositioned and
/// play returns to `AwaitingShot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPhase {
    #[default]
    AwaitingShot,
    InFlight,
    Resetting,
    GameOver,
}

/// How a shot resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Saved,
    Goal,
    Miss,
    /// Ball died on the field without reaching anything - still a spent
    /// shot, but no banner and no score change
    Dead,
}

/// What the shot cap forced after an outcome was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowAdvance {
    Continue,
    SwappedRoles,
    GameOver,
}

/// All match-level state. Owned here; no other module mutates scores,
/// counters, or the phase.
#[derive(Resource, Debug, Clone)]
pub struct MatchState {
    pub scores: [u32; 2],
    pub shots_taken: u32,
    pub max_shots: u32,
    pub kicker: Role,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub phase: MatchPhase,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(GameMode::default(), Difficulty::default(), crate::constants::DEFAULT_MAX_SHOTS)
    }
}

impl MatchState {
    pub fn new(mode: GameMode, difficulty: Difficulty, max_shots: u32) -> Self {
        Self {
            scores: [0, 0],
            shots_taken: 0,
            max_shots,
            kicker: Role::One,
            mode,
            difficulty,
            phase: MatchPhase::AwaitingShot,
        }
    }

    /// The role currently guarding the goal
    pub fn keeper_role(&self) -> Role {
        self.kicker.other()
    }

    pub fn score_of(&self, role: Role) -> u32 {
        self.scores[role.index()]
    }

    /// Book a resolved shot: bump counters, score goals, and drive the
    /// role-swap/game-over transition when the cap is reached.
    pub fn apply_outcome(&mut self, outcome: ShotOutcome) -> FlowAdvance {
        self.shots_taken += 1;
        if outcome == ShotOutcome::Goal {
            self.scores[self.kicker.index()] += 1;
        }

        if self.shots_taken >= self.max_shots {
            if self.mode == GameMode::TwoLocalRoles && self.kicker == Role::One {
                // Second role gets its turn; accumulated scores stay put
                self.kicker = Role::Two;
                self.shots_taken = 0;
                self.phase = MatchPhase::Resetting;
                return FlowAdvance::SwappedRoles;
            }
            self.phase = MatchPhase::GameOver;
            return FlowAdvance::GameOver;
        }

        self.phase = MatchPhase::Resetting;
        FlowAdvance::Continue
    }
}

/// Run condition: the match is still being played
pub fn match_active(state: Res<MatchState>) -> bool {
    state.phase != MatchPhase::GameOver
}

/// Banner shown after a resolved shot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Goal,
    Missed,
    Saved,
}

/// Transient outcome banner on a frame-count timer
#[derive(Resource, Default)]
pub struct OutcomeBanner {
    pub frames: u32,
    pub kind: Option<BannerKind>,
}

impl OutcomeBanner {
    pub fn show(&mut self, kind: BannerKind) {
        self.kind = Some(kind);
        self.frames = OUTCOME_BANNER_FRAMES;
    }
}

/// Count the banner timer down once per tick
pub fn tick_outcome_banner(mut banner: ResMut<OutcomeBanner>) {
    if banner.frames > 0 {
        banner.frames -= 1;
        if banner.frames == 0 {
            banner.kind = None;
        }
    }
}

/// Classify how the current shot resolved this tick, if it did.
///
/// Precedence is load-bearing: a frame where the keeper's footprint and the
/// goal rectangle both contain the ball must resolve as a save.
pub fn classify_outcome(
    flight: &BallFlight,
    ball_pos: Vec2,
    geom: &FieldGeometry,
) -> Option<ShotOutcome> {
    if flight.just_saved {
        return Some(ShotOutcome::Saved);
    }
    if flight.shot_by_kicker && goal_contains(ball_pos, geom) {
        return Some(ShotOutcome::Goal);
    }
    if !flight.in_flight && flight.shot_by_kicker {
        if flight.left_field {
            return Some(ShotOutcome::Miss);
        }
        if ball_pos.y >= geom.goal_line_y - geom.net_depth {
            // Came to rest past the goal line without entering the goal
            return Some(ShotOutcome::Miss);
        }
        return Some(ShotOutcome::Dead);
    }
    None
}

/// Per-frame outcome evaluation. Runs after the keeper save check and the
/// ball step.
pub fn evaluate_outcome(
    geom: Res<FieldGeometry>,
    mut state: ResMut<MatchState>,
    mut banner: ResMut<OutcomeBanner>,
    mut bus: ResMut<EventBus>,
    mut ball_query: Query<(&Transform, &mut Velocity, &mut BallSpin, &mut BallFlight), With<Ball>>,
) {
    if state.phase != MatchPhase::InFlight {
        return;
    }
    let Ok((transform, mut velocity, mut spin, mut flight)) = ball_query.single_mut() else {
        return;
    };
    let ball_pos = transform.translation.truncate();

    let Some(outcome) = classify_outcome(&flight, ball_pos, &geom) else {
        return;
    };

    match outcome {
        ShotOutcome::Saved => {
            flight.just_saved = false;
            banner.show(BannerKind::Saved);
        }
        ShotOutcome::Goal => {
            // The shot is over; outcome logic must observe a settled ball
            velocity.0 = Vec2::ZERO;
            spin.0 = 0.0;
            flight.in_flight = false;
            banner.show(BannerKind::Goal);
        }
        ShotOutcome::Miss => banner.show(BannerKind::Missed),
        ShotOutcome::Dead => {}
    }

    let shooter = state.kicker;
    let advance = state.apply_outcome(outcome);

    match outcome {
        ShotOutcome::Goal => {
            bus.emit(GameEvent::Goal {
                role: shooter,
                score_one: state.scores[0],
                score_two: state.scores[1],
            });
            info!(
                "GOAL by {}! {} - {}",
                shooter, state.scores[0], state.scores[1]
            );
        }
        ShotOutcome::Miss | ShotOutcome::Dead => {
            bus.emit(GameEvent::Miss { role: shooter });
        }
        // The keeper emitted the Save event at the moment of contact
        ShotOutcome::Saved => {}
    }

    match advance {
        FlowAdvance::SwappedRoles => {
            bus.emit(GameEvent::RoleSwap {
                kicker: state.kicker,
            });
            info!("Roles swap: {} now kicking", state.kicker);
        }
        FlowAdvance::GameOver => {
            bus.emit(GameEvent::MatchEnd {
                score_one: state.scores[0],
                score_two: state.scores[1],
                shots: state.shots_taken,
            });
            info!(
                "Match over: {} - {}",
                state.scores[0], state.scores[1]
            );
        }
        FlowAdvance::Continue => {}
    }
}

/// Reposition everything for the next shot. Runs while `Resetting`; the
/// match module is the sole owner of entity restarts.
pub fn perform_reset(
    geom: Res<FieldGeometry>,
    mut state: ResMut<MatchState>,
    mut ball_query: Query<
        (&mut Transform, &mut Velocity, &mut BallSpin, &mut BallFlight),
        With<Ball>,
    >,
    mut kicker_query: Query<
        (&mut Transform, &mut ChargingKick),
        (With<Kicker>, Without<Ball>),
    >,
    mut keeper_query: Query<
        (
            &mut Transform,
            &mut KeeperBody,
            &mut KeeperReaction,
            &mut DiveState,
            &mut HandPosition,
        ),
        (With<Keeper>, Without<Ball>, Without<Kicker>),
    >,
) {
    if state.phase != MatchPhase::Resetting {
        return;
    }

    let spot = geom.penalty_spot;
    for (mut transform, mut velocity, mut spin, mut flight) in &mut ball_query {
        let mut pos = transform.translation.truncate();
        reset_to_spot(&mut pos, &mut velocity.0, &mut spin.0, &mut flight, spot);
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;
    }

    for (mut transform, mut charging) in &mut kicker_query {
        transform.translation.x = spot.x;
        transform.translation.y = spot.y - KICKER_SPOT_OFFSET;
        charging.charging = false;
        charging.power = 0.0;
    }

    let goal_center_x = geom.goal_x + geom.goal_width / 2.0;
    for (mut transform, mut body, mut reaction, mut dive, mut hand) in &mut keeper_query {
        transform.translation.x = goal_center_x;
        transform.translation.y = geom.keeper_y;
        body.target_x = goal_center_x;
        reaction.cancel();
        dive.cancel();
        hand.0 = transform.translation.truncate();
    }

    state.phase = MatchPhase::AwaitingShot;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BALL_RADIUS;

    fn flight_shot() -> BallFlight {
        BallFlight {
            in_flight: true,
            shot_by_kicker: true,
            ..Default::default()
        }
    }

    fn goal_center(geom: &FieldGeometry) -> Vec2 {
        Vec2::new(0.0, geom.goal_line_y - geom.net_depth / 2.0)
    }

    #[test]
    fn test_save_beats_goal_in_the_same_frame() {
        let geom = FieldGeometry::default();
        // Ball simultaneously marked saved and sitting inside the goal
        let flight = BallFlight {
            in_flight: true,
            shot_by_kicker: false,
            just_saved: true,
            left_field: false,
        };
        assert_eq!(
            classify_outcome(&flight, goal_center(&geom), &geom),
            Some(ShotOutcome::Saved)
        );
    }

    #[test]
    fn test_goal_requires_kicker_shot() {
        let geom = FieldGeometry::default();
        let rebound = BallFlight {
            in_flight: true,
            shot_by_kicker: false,
            ..Default::default()
        };
        assert_eq!(classify_outcome(&rebound, goal_center(&geom), &geom), None);
        assert_eq!(
            classify_outcome(&flight_shot(), goal_center(&geom), &geom),
            Some(ShotOutcome::Goal)
        );
    }

    #[test]
    fn test_miss_classification() {
        let geom = FieldGeometry::default();
        let mut flight = flight_shot();
        flight.in_flight = false;
        flight.left_field = true;
        assert_eq!(
            classify_outcome(&flight, Vec2::new(geom.half_width, 0.0), &geom),
            Some(ShotOutcome::Miss)
        );

        // Settled just past the goal line but outside the mouth
        flight.left_field = false;
        let rest = Vec2::new(geom.goal_x - 40.0, geom.goal_line_y - BALL_RADIUS);
        assert_eq!(classify_outcome(&flight, rest, &geom), Some(ShotOutcome::Miss));

        // Settled mid-field: spent shot, no banner
        assert_eq!(
            classify_outcome(&flight, Vec2::new(0.0, 0.0), &geom),
            Some(ShotOutcome::Dead)
        );
    }

    #[test]
    fn test_in_flight_ball_has_no_outcome() {
        let geom = FieldGeometry::default();
        assert_eq!(
            classify_outcome(&flight_shot(), Vec2::new(0.0, 0.0), &geom),
            None
        );
    }

    #[test]
    fn test_shot_counter_increments_once_per_outcome() {
        let mut state = MatchState::new(GameMode::SingleKicker, Difficulty::Medium, 10);
        for (i, outcome) in [
            ShotOutcome::Goal,
            ShotOutcome::Saved,
            ShotOutcome::Miss,
            ShotOutcome::Dead,
        ]
        .into_iter()
        .enumerate()
        {
            state.apply_outcome(outcome);
            assert_eq!(state.shots_taken, i as u32 + 1);
        }
        assert_eq!(state.scores, [1, 0]);
    }

    #[test]
    fn test_single_mode_game_over_at_cap() {
        let mut state = MatchState::new(GameMode::SingleKicker, Difficulty::Medium, 3);
        assert_eq!(state.apply_outcome(ShotOutcome::Miss), FlowAdvance::Continue);
        assert_eq!(state.apply_outcome(ShotOutcome::Goal), FlowAdvance::Continue);
        assert_eq!(state.apply_outcome(ShotOutcome::Miss), FlowAdvance::GameOver);
        assert_eq!(state.phase, MatchPhase::GameOver);
    }

    #[test]
    fn test_role_swap_preserves_scores() {
        let mut state = MatchState::new(GameMode::TwoLocalRoles, Difficulty::Medium, 2);
        state.apply_outcome(ShotOutcome::Goal);
        let advance = state.apply_outcome(ShotOutcome::Goal);
        assert_eq!(advance, FlowAdvance::SwappedRoles);
        assert_eq!(state.kicker, Role::Two);
        assert_eq!(state.shots_taken, 0);
        assert_eq!(state.scores, [2, 0]);

        // Second role plays out its shots, first role's score untouched
        state.apply_outcome(ShotOutcome::Goal);
        let advance = state.apply_outcome(ShotOutcome::Saved);
        assert_eq!(advance, FlowAdvance::GameOver);
        assert_eq!(state.scores, [2, 1]);
    }

    #[test]
    fn test_banner_show_resets_timer() {
        let mut banner = OutcomeBanner::default();
        banner.show(BannerKind::Goal);
        assert_eq!(banner.frames, OUTCOME_BANNER_FRAMES);
        assert_eq!(banner.kind, Some(BannerKind::Goal));
        banner.show(BannerKind::Missed);
        assert_eq!(banner.frames, OUTCOME_BANNER_FRAMES);
        assert_eq!(banner.kind, Some(BannerKind::Missed));
    }
}
