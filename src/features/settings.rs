//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Tactile feedback settings
    #[serde(default)]
    pub feedback: FeedbackSettings,
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark mode enabled
    #[serde(default = "default_true")]
    pub dark_mode: bool,
    /// Skip slide/fade transitions
    #[serde(default)]
    pub reduce_motion: bool,
}

/// Feedback settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackSettings {
    /// Play haptic cues on interaction
    #[serde(default = "default_true")]
    pub haptics_enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            reduce_motion: false,
        }
    }
}

impl Default for FeedbackSettings {
    fn default() -> Self {
        Self {
            haptics_enabled: true,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "feather", "Feather")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };

        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(_)) => Self::default(),
            Err(e) => {
                tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("feather-settings-{}-{}", name, std::process::id()))
            .join("settings.json")
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_settings_path("roundtrip");
        let settings = Settings {
            display: DisplaySettings {
                dark_mode: false,
                reduce_motion: true,
            },
            feedback: FeedbackSettings {
                haptics_enabled: false,
            },
        };

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = temp_settings_path("missing");
        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Io(_))
        ));
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let path = temp_settings_path("corrupt");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        let err = Settings::load_from_file(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error"));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_empty_display_keeps_other_sections() {
        let settings: Settings =
            serde_json::from_str(r#"{"display":{},"feedback":{"haptics_enabled":false}}"#)
                .unwrap();
        assert!(settings.display.dark_mode);
        assert!(!settings.display.reduce_motion);
        assert!(!settings.feedback.haptics_enabled);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"display":{"dark_mode":false}}"#).unwrap();
        assert!(!settings.display.dark_mode);
        assert!(!settings.display.reduce_motion);
        assert!(settings.feedback.haptics_enabled);
    }
}
