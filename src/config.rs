//! Engine configuration

use anyhow::Context;
use ktane_core::morse::MorseTiming;
use ktane_cv::DetectionConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Free-play menu choices, as indices into the menu's value lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub time_limit: usize,
    pub module_count: usize,
    pub needy: bool,
    pub hardcore: bool,
}

impl GameSettings {
    /// What the free-play menu shows when it opens
    pub const MENU: GameSettings = GameSettings {
        time_limit: 9,
        module_count: 0,
        needy: false,
        hardcore: false,
    };
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            time_limit: 19,
            module_count: 9,
            needy: false,
            hardcore: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Pause after a click so the game registers it
    pub settle_secs: f64,
    pub capture_timeout_secs: f64,
    /// Multiplies every sleep; 0 turns sleeping off for dry runs.
    pub time_scale: f64,
    pub settings: GameSettings,
    pub morse: MorseTiming,
    pub detection: DetectionConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            settle_secs: 1.0 / 30.0,
            capture_timeout_secs: 2.0,
            time_scale: 1.0,
            settings: GameSettings::default(),
            morse: MorseTiming::default(),
            detection: DetectionConfig::default(),
        }
    }
}

fn seconds(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO)
}

impl EngineConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    pub fn capture_timeout(&self) -> Duration {
        seconds(self.capture_timeout_secs)
    }

    /// Sleep length after time scaling
    pub fn scaled(&self, secs: f64) -> Duration {
        seconds(secs * self.time_scale)
    }

    /// Configuration for dry runs: nothing sleeps.
    pub fn instant() -> Self {
        Self {
            time_scale: 0.0,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: EngineConfig = serde_json::from_str(
            r#"{ "time_scale": 0.5, "morse": { "dash_secs": 0.6 }, "detection": { "lamp_pixels": 180 } }"#,
        )
        .unwrap();
        assert_eq!(config.time_scale, 0.5);
        assert_eq!(config.morse.dash_secs, 0.6);
        assert_eq!(config.morse.word_gap_secs, 1.5);
        assert_eq!(config.detection.lamp_pixels, 180);
        assert_eq!(config.settings, GameSettings::default());
        assert_eq!(config.capture_timeout(), Duration::from_secs(2));
    }

    #[test]
    fn test_scaled_sleeps() {
        let config = EngineConfig {
            time_scale: 0.5,
            ..EngineConfig::default()
        };
        assert_eq!(config.scaled(3.0), Duration::from_millis(1500));
        assert_eq!(EngineConfig::instant().scaled(14.0), Duration::ZERO);
        assert_eq!(config.scaled(-1.0), Duration::ZERO);
    }

    #[test]
    fn test_load_reports_path() {
        let err = EngineConfig::load(Path::new("/nonexistent/ktane.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/ktane.json"));
    }
}
