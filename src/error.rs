use ktane_core::{ModuleKind, RuleError};
use std::time::Duration;
use thiserror::Error;

/// Failures of the engine layer.
///
/// Solvers return `anyhow::Result`; these are the typed causes callers may
/// want to downcast to.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("screen capture timed out after {0:?}")]
    CaptureTimeout(Duration),

    #[error("screen capture failed: {0}")]
    Capture(String),

    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error("{}: {reason}", module.name())]
    Detection {
        module: ModuleKind,
        reason: &'static str,
    },

    #[error("classifier label {label} is not a {what}")]
    UnknownLabel { what: &'static str, label: usize },

    #[error("no timer region for timer slot {timer} and button slot {button}")]
    NoTimerRegion { timer: usize, button: usize },
}

impl EngineError {
    pub fn detection(module: ModuleKind, reason: &'static str) -> Self {
        Self::Detection { module, reason }
    }
}
