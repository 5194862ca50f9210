//! Presentation and host settings
//!
//! Only how the game looks and how hosts drive it. Game rules are fixed
//! constants in `consts` and cannot be configured.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable the native host reads settings JSON from
pub const SETTINGS_ENV_VAR: &str = "PONG_SETTINGS";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
}

/// Presentation/host settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Colors (CSS color strings) ===
    pub ball_color: String,
    pub paddle_color: String,
    pub score_color: String,

    // === Score label ===
    /// CSS font for the score label
    pub score_font: String,
    /// Spaces between the two numbers
    pub score_gap: usize,
    /// Baseline y of the score label
    pub score_y: f32,

    // === Headless host ===
    /// Frames the native binary simulates before exiting
    pub headless_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_color: "#e0e0e0".to_string(),
            paddle_color: "#e0e0e0".to_string(),
            score_color: "#e0e0e0".to_string(),

            score_font: "64px Courier New".to_string(),
            score_gap: 16,
            score_y: 60.0,

            headless_frames: 3_600,
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        let required = [
            ("ball_color", &self.ball_color),
            ("paddle_color", &self.paddle_color),
            ("score_color", &self.score_color),
            ("score_font", &self.score_font),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(SettingsError::Empty { field });
            }
        }
        Ok(())
    }

    /// Parse an optional JSON source, falling back to defaults with a warning
    pub fn load_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(settings)) => {
                log::info!("Loaded settings");
                settings
            }
            Some(Err(e)) => {
                log::warn!("Ignoring settings: {}", e);
                Self::default()
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from the `PONG_SETTINGS` environment variable
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let json = std::env::var(SETTINGS_ENV_VAR).ok();
        Self::load_or_default(json.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r##"{"ball_color": "#ff0000", "score_gap": 4}"##).unwrap();
        assert_eq!(settings.ball_color, "#ff0000");
        assert_eq!(settings.score_gap, 4);
        assert_eq!(settings.paddle_color, Settings::default().paddle_color);
        assert_eq!(settings.headless_frames, 3_600);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = Settings::from_json("{not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_empty_color_rejected() {
        let err = Settings::from_json(r#"{"paddle_color": "  "}"#).unwrap_err();
        assert!(matches!(err, SettingsError::Empty { field: "paddle_color" }));
        assert_eq!(err.to_string(), "paddle_color must not be empty");
    }

    #[test]
    fn test_load_or_default_falls_back() {
        assert_eq!(Settings::load_or_default(None), Settings::default());
        assert_eq!(Settings::load_or_default(Some("nope")), Settings::default());
        let loaded = Settings::load_or_default(Some(r#"{"headless_frames": 10}"#));
        assert_eq!(loaded.headless_frames, 10);
    }
}
