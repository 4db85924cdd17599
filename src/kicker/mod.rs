//! Kicker module - aim, charge, and kick systems

pub mod components;
pub mod systems;

pub use components::{AimAngle, ChargingKick, Kicker};
pub use systems::{aim_update, charge_update, kick_release, kicker_move};
