//! Persistent settings for game initialization
//!
//! Saves and loads user preferences (difficulty, game mode, shots per role)
//! to/from an init_settings.json file in the config directory.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::*;

/// Path to the settings file
pub const SETTINGS_FILE: &str = "config/init_settings.json";

/// Keeper difficulty, fixed per match. Affects only the keeper's lateral
/// speed and reaction-delay distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Lateral keeper speed in units per tick
    pub fn keeper_speed(self) -> f32 {
        match self {
            Difficulty::Easy => KEEPER_SPEED_EASY,
            Difficulty::Medium => KEEPER_SPEED_MEDIUM,
            Difficulty::Hard => KEEPER_SPEED_HARD,
        }
    }

    /// Reaction delay distribution as (base frames, jitter frames)
    pub fn reaction_frames(self) -> (u32, u32) {
        match self {
            Difficulty::Easy => REACTION_FRAMES_EASY,
            Difficulty::Medium => REACTION_FRAMES_MEDIUM,
            Difficulty::Hard => REACTION_FRAMES_HARD,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Who controls the goalkeeper, fixed per match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// One kicker against the autonomous keeper
    #[default]
    SingleKicker,
    /// Two local players trading kicker and keeper roles on one keyboard
    TwoLocalRoles,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::SingleKicker => "single",
            GameMode::TwoLocalRoles => "two_local",
        }
    }

    /// Whether the keeper reads dive commands instead of deciding itself
    pub fn human_keeper(self) -> bool {
        matches!(self, GameMode::TwoLocalRoles)
    }
}

/// Persistent settings that survive between sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitSettings {
    pub difficulty: Difficulty,
    pub mode: GameMode,
    /// Shots each kicker role takes before the match resolves
    pub max_shots: u32,
}

impl Default for InitSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            mode: GameMode::default(),
            max_shots: DEFAULT_MAX_SHOTS,
        }
    }
}

impl InitSettings {
    /// Load settings from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        let path = Path::new(SETTINGS_FILE);
        if !path.exists() {
            info!("No init_settings.json found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {}", SETTINGS_FILE);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse init_settings.json: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read init_settings.json: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to file
    pub fn save(&self) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        if let Some(parent) = Path::new(SETTINGS_FILE).parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(SETTINGS_FILE, json)?;
        info!("Saved settings to {}", SETTINGS_FILE);
        Ok(())
    }
}

/// Resource tracking the current init settings (for change detection)
#[derive(Resource)]
pub struct CurrentSettings {
    pub settings: InitSettings,
    pub dirty: bool,
}

impl Default for CurrentSettings {
    fn default() -> Self {
        Self {
            settings: InitSettings::load(),
            dirty: false,
        }
    }
}

impl CurrentSettings {
    /// Mark settings as changed (will be saved on next update)
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Save if dirty
    pub fn save_if_dirty(&mut self) {
        if self.dirty {
            if let Err(e) = self.settings.save() {
                warn!("Failed to save settings: {}", e);
            }
            self.dirty = false;
        }
    }
}

/// System to save settings when changed
pub fn save_settings_system(mut settings: ResMut<CurrentSettings>) {
    settings.save_if_dirty();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harder_keepers_react_faster() {
        let (easy_base, _) = Difficulty::Easy.reaction_frames();
        let (med_base, _) = Difficulty::Medium.reaction_frames();
        let (hard_base, _) = Difficulty::Hard.reaction_frames();
        assert!(easy_base > med_base);
        assert!(med_base > hard_base);
        assert!(Difficulty::Hard.keeper_speed() > Difficulty::Easy.keeper_speed());
    }

    #[test]
    fn test_settings_serde_round_trip() {
        let settings = InitSettings {
            difficulty: Difficulty::Hard,
            mode: GameMode::TwoLocalRoles,
            max_shots: 3,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: InitSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.difficulty, Difficulty::Hard);
        assert_eq!(back.mode, GameMode::TwoLocalRoles);
        assert_eq!(back.max_shots, 3);
    }
}
