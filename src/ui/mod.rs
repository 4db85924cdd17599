//! Presentation layer - HUD, charge gauge, and outcome banners
//!
//! Reads entity and match state every frame; writes nothing back into the
//! simulation.

pub mod charge_gauge;
pub mod hud;
pub mod messages;

pub use charge_gauge::{
    ChargeGaugeBackground, ChargeGaugeFill, spawn_charge_gauge, update_charge_gauge,
};
pub use hud::{AimPowerText, ScoreText, spawn_hud, update_aim_power_text, update_score_text};
pub use messages::{BannerText, spawn_banner_text, update_banner_text};
