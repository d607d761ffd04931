//! Detection configuration

use serde::{Deserialize, Serialize};

/// Runtime-tunable detection thresholds.
///
/// Color ranges and geometry stay compile-time constants next to their
/// detectors; these are the gates that depend on display brightness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Mean HSV value a zoomed module must exceed before it is read
    pub lit_brightness: f64,
    /// Bright pixels a simon says lamp or the morse blinker must exceed
    pub lamp_pixels: usize,
    /// Pixels of one color needed to name the button strip
    pub strip_pixels: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            lit_brightness: 100.0,
            lamp_pixels: 200,
            strip_pixels: 200,
        }
    }
}
