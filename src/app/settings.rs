use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::AppError;

/// Persisted appearance configuration.
///
/// Every field carries a serde default so a config file written by an older
/// version (or edited by hand) fills only the keys it actually has. A file
/// that fails to parse at all is discarded wholesale and replaced by the
/// full default set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    #[serde(default = "default_font_family")]
    pub font_family: String,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default = "default_text_color")]
    pub text_color: String,

    #[serde(default = "default_bg_color")]
    pub bg_color: String,
}

fn default_font_family() -> String {
    "Arial".to_string()
}

fn default_font_size() -> u32 {
    12
}

fn default_text_color() -> String {
    "black".to_string()
}

fn default_bg_color() -> String {
    "white".to_string()
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_size: default_font_size(),
            text_color: default_text_color(),
            bg_color: default_bg_color(),
        }
    }
}

impl EditorSettings {
    /// Load settings from the config file, or defaults if absent.
    /// Never fails observably: a missing file is silent, a broken one is
    /// logged and replaced by defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Failed to read settings: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Save the full settings record, overwriting the config file.
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// The settings live next to the executable's working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = EditorSettings::default();
        assert_eq!(settings.font_family, "Arial");
        assert_eq!(settings.font_size, 12);
        assert_eq!(settings.text_color, "black");
        assert_eq!(settings.bg_color, "white");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = EditorSettings::load_from(&dir.path().join("config.json"));
        assert_eq!(settings, EditorSettings::default());
    }

    #[test]
    fn test_partial_config_fills_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"font_size": 18}"#).unwrap();

        let settings = EditorSettings::load_from(&path);
        assert_eq!(settings.font_size, 18);
        assert_eq!(settings.font_family, "Arial");
        assert_eq!(settings.text_color, "black");
        assert_eq!(settings.bg_color, "white");
    }

    #[test]
    fn test_malformed_config_resets_everything() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"font_size": 18, oops"#).unwrap();

        let settings = EditorSettings::load_from(&path);
        assert_eq!(settings, EditorSettings::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let settings = EditorSettings {
            font_family: "Courier".to_string(),
            font_size: 16,
            text_color: "#112233".to_string(),
            bg_color: "#ffffee".to_string(),
        };
        settings.save_to(&path).unwrap();

        let loaded = EditorSettings::load_from(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_save_overwrites_in_full() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"font_size": 99, "extra_key": true}"#).unwrap();

        EditorSettings::default().save_to(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("extra_key"));
        assert_eq!(EditorSettings::load_from(&path), EditorSettings::default());
    }

    #[test]
    fn test_save_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // Writing to a directory path fails with an IO error.
        let err = EditorSettings::default().save_to(dir.path()).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
