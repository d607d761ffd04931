use crate::error::RuleError;
use serde::{Deserialize, Serialize};

/// A labelled indicator lamp found on one of the bomb's edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicator {
    pub lit: bool,
    pub label: String,
}

impl Indicator {
    pub fn new(lit: bool, label: impl Into<String>) -> Self {
        Self {
            lit,
            label: label.into(),
        }
    }
}

/// Cross-module state collected while inspecting the bomb.
///
/// Written once during inspection, read by every solver afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BombFacts {
    pub serial: Option<String>,
    pub indicators: Vec<Indicator>,
    pub batteries: u32,
    pub parallel_ports: u32,
    /// Board slot (0-5) of the module showing the countdown.
    pub timer_position: usize,
}

impl BombFacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the first serial read; later sides cannot override it.
    pub fn record_serial(&mut self, serial: String) {
        if self.serial.is_none() {
            self.serial = Some(serial);
        }
    }

    pub fn serial(&self) -> Result<&str, RuleError> {
        self.serial.as_deref().ok_or(RuleError::MissingSerial)
    }

    pub fn serial_last_digit(&self) -> Result<u32, RuleError> {
        let serial = self.serial()?;
        serial
            .chars()
            .last()
            .and_then(|c| c.to_digit(10))
            .ok_or_else(|| RuleError::SerialWithoutDigit(serial.to_string()))
    }

    pub fn serial_is_odd(&self) -> Result<bool, RuleError> {
        Ok(self.serial_last_digit()? % 2 == 1)
    }

    pub fn serial_is_even(&self) -> Result<bool, RuleError> {
        self.serial_is_odd().map(|odd| !odd)
    }

    pub fn serial_has_vowel(&self) -> Result<bool, RuleError> {
        Ok(self
            .serial()?
            .chars()
            .any(|c| matches!(c, 'A' | 'E' | 'I' | 'O' | 'U')))
    }

    /// True when any indicator with this label is lit.
    pub fn has_lit_indicator(&self, label: &str) -> bool {
        self.indicators
            .iter()
            .any(|indicator| indicator.lit && indicator.label == label)
    }
}
