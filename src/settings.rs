//! Game settings and preferences
//!
//! Persisted as JSON next to the score file. Any field may be omitted;
//! a missing or broken file falls back to defaults.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::highscores::DEFAULT_SCORE_FILE;
use crate::sim::CharacterVariant;
use crate::tuning::Tuning;

/// Default settings file name
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Selected character skin
    pub character: CharacterVariant,
    /// High score file
    pub score_file: PathBuf,
    /// Fixed RNG seed (random per launch when absent)
    pub seed: Option<u64>,

    // === Driver ===
    /// Let the AI play
    pub autopilot: bool,
    /// Pace frames against the wall clock instead of running flat out
    pub realtime: bool,
    /// Stop a run after this many simulated seconds (0 = no limit)
    pub max_run_seconds: f32,

    // === Balance ===
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            character: CharacterVariant::Normal,
            score_file: PathBuf::from(DEFAULT_SCORE_FILE),
            seed: None,

            autopilot: true,
            realtime: false,
            max_run_seconds: 120.0,

            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults on any problem
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("Using default settings");
                return Self::default();
            }
            Err(e) => {
                log::warn!("Could not read {}: {e}; using defaults", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str(&text) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON. Failures are logged, not returned.
    pub fn save(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match serde_json::to_string_pretty(self) {
            Ok(json) => match fs::write(path, json) {
                Ok(()) => log::info!("Settings saved"),
                Err(e) => log::warn!("Could not write {}: {e}", path.display()),
            },
            Err(e) => log::warn!("Could not serialize settings: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "character": "Pirate", "tuning": { "gravity": 2000.0 } }"#)
                .unwrap();
        assert_eq!(settings.character, CharacterVariant::Pirate);
        assert_eq!(settings.tuning.gravity, 2000.0);
        assert_eq!(settings.tuning.max_speed, Tuning::default().max_speed);
        assert_eq!(settings.score_file, PathBuf::from(DEFAULT_SCORE_FILE));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.json");
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn test_invalid_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("saved.json");
        let settings = Settings {
            character: CharacterVariant::Cowboy,
            seed: Some(7),
            ..Default::default()
        };
        settings.save(&path);
        assert_eq!(Settings::load(&path), settings);
    }
}
