//! Simulation configuration

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_SHOTS;
use crate::settings::Difficulty;

/// Configuration for a batch of headless shootouts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of shootouts to run
    pub matches: u32,
    /// Keeper difficulty for every match
    pub difficulty: Difficulty,
    /// Shots per shootout
    pub max_shots: u32,
    /// Base RNG seed for the shot scripts (None = random)
    pub seed: Option<u64>,
    /// Number of rayon threads (0 = sequential)
    pub parallel: usize,
    /// Output file path (None = stdout)
    pub output_file: Option<String>,
    /// Suppress per-match progress output
    pub quiet: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            matches: 20,
            difficulty: Difficulty::Medium,
            max_shots: DEFAULT_MAX_SHOTS,
            seed: None,
            parallel: 0,
            output_file: None,
            quiet: false,
        }
    }
}

/// Local simulation settings (optional, user's custom defaults)
pub const SIM_SETTINGS_FILE: &str = "config/simulation_settings.json";

impl SimConfig {
    /// Load configuration from a JSON settings file
    pub fn from_file(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse {}: {}", path, e))
    }

    /// Load from the default settings file, or fall back to built-ins
    pub fn from_config_files() -> Self {
        Self::from_file(SIM_SETTINGS_FILE).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trip() {
        let config = SimConfig {
            matches: 100,
            difficulty: Difficulty::Hard,
            seed: Some(42),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.matches, 100);
        assert_eq!(back.difficulty, Difficulty::Hard);
        assert_eq!(back.seed, Some(42));
    }
}
