//! Goalkeeper module - components, controllers, and the shared save check
//!
//! Two controllers exist: the autonomous one (tracking, reaction delay,
//! shot prediction) and the human one (fire-once dive commands). Both
//! express their decision as a `DiveIntent` that the shared apply system
//! consumes, and both share one save hit-test.

pub mod autonomous;
pub mod components;
pub mod dive;
pub mod save;

pub use autonomous::{choose_dive, keeper_decide_autonomous, sample_reaction_frames};
pub use components::{
    DiveDirection, DiveIntent, DiveState, HandPosition, HumanControlled, Keeper, KeeperBody,
    KeeperReaction,
};
pub use dive::{dive_offset, keeper_apply_intent, keeper_decide_human, speed_bonus};
pub use save::{footprint_hit, keeper_block_shots, resolve_save};
