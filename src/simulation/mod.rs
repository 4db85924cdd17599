//! Headless simulation - batch shootouts for tuning and regression checks

pub mod config;
pub mod metrics;
pub mod parallel;
pub mod runner;

pub use config::{SIM_SETTINGS_FILE, SimConfig};
pub use metrics::{MatchResult, ShootoutSummary};
pub use parallel::run_batch;
pub use runner::{ShotScript, build_headless_app, run_match, scripted_kick};
