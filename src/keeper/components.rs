//! Goalkeeper-related components

use bevy::prelude::*;

/// Marker for the goalkeeper entity
#[derive(Component)]
pub struct Keeper;

/// Marker for a keeper driven by dive commands instead of the autonomous
/// controller. Set once at match setup, never toggled mid-match.
#[derive(Component)]
pub struct HumanControlled;

/// Direction of the current reactive movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiveDirection {
    #[default]
    None,
    Left,
    Right,
    /// Toward the goal line; reachable only via human commands
    Up,
    /// Toward the field; reachable only via human commands
    Down,
}

impl DiveDirection {
    /// Unit vector of the dive in world coordinates
    pub fn unit(self) -> Vec2 {
        match self {
            DiveDirection::None => Vec2::ZERO,
            DiveDirection::Left => Vec2::NEG_X,
            DiveDirection::Right => Vec2::X,
            DiveDirection::Up => Vec2::Y,
            DiveDirection::Down => Vec2::NEG_Y,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DiveDirection::None => "none",
            DiveDirection::Left => "left",
            DiveDirection::Right => "right",
            DiveDirection::Up => "up",
            DiveDirection::Down => "down",
        }
    }
}

/// Lateral movement parameters and the smoothed tracking target
#[derive(Component)]
pub struct KeeperBody {
    /// Difficulty-derived lateral speed (units per tick)
    pub speed: f32,
    pub target_x: f32,
}

impl KeeperBody {
    pub fn new(speed: f32, start_x: f32) -> Self {
        Self {
            speed,
            target_x: start_x,
        }
    }
}

/// Reaction state for the autonomous controller.
///
/// The dive direction is `None` unless `reacting` is set.
#[derive(Component, Default)]
pub struct KeeperReaction {
    /// Frames left before the keeper commits to a dive
    pub waiting: Option<u32>,
    pub reacting: bool,
    pub dive: DiveDirection,
}

impl KeeperReaction {
    pub fn cancel(&mut self) {
        self.waiting = None;
        self.reacting = false;
        self.dive = DiveDirection::None;
    }
}

/// Wall-clock dive state for a human-controlled keeper
#[derive(Component, Default)]
pub struct DiveState {
    pub active: bool,
    pub direction: DiveDirection,
    /// Wall-clock seconds when the dive started
    pub started_at: f32,
    pub origin: Vec2,
    /// Seconds spent holding position after the dive finished
    pub recovery_elapsed: f32,
    pub recovering: bool,
}

impl DiveState {
    /// Whether a new dive command may be accepted
    pub fn ready(&self) -> bool {
        !self.active && !self.recovering
    }

    pub fn cancel(&mut self) {
        *self = Self::default();
    }
}

/// Hand reach position. Equals the body position except during a dive.
#[derive(Component, Default)]
pub struct HandPosition(pub Vec2);

/// What the keeper controller decided this tick. Written by exactly one of
/// the two controllers and consumed uniformly by the shared apply system.
#[derive(Component, Default, Debug, Clone, Copy, PartialEq)]
pub enum DiveIntent {
    #[default]
    Hold,
    /// Slide toward a lateral target (autonomous tracking and dives)
    Track {
        target_x: f32,
        dive: DiveDirection,
    },
    /// Begin a timed dive (human command)
    StartDive(DiveDirection),
    /// Lateral walk at the given signed speed (human, not diving)
    Walk(f32),
}
