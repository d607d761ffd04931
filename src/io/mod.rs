//! Collaborator ports: screen capture, pointer injection and time
//!
//! Platform backends live outside this crate. The engine only sees these
//! traits, so every solver can be driven from recorded frames.

pub mod file;
pub mod scripted;

use image::RgbImage;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use thiserror::Error;

pub use file::FileCapture;
pub use scripted::{ManualClock, PointerAction, RecordingPointer, ScriptedCapture, ScriptedClassifier};

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("no frame within {0:?}")]
    Timeout(Duration),

    #[error("capture backend failed: {0}")]
    Backend(String),
}

/// Synchronous screen grabber returning full 1920x1080 RGB frames.
pub trait ScreenCapture {
    fn capture(&mut self, timeout: Duration) -> Result<RgbImage, CaptureError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
}

/// Fire-and-forget pointer injection in screen coordinates.
pub trait Pointer {
    fn move_to(&mut self, x: i32, y: i32);
    fn button_down(&mut self, button: MouseButton);
    fn button_up(&mut self, button: MouseButton);
}

/// Monotonic time and sleeping.
pub trait Clock {
    /// Time since an arbitrary fixed origin
    fn now(&self) -> Duration;
    fn sleep(&mut self, duration: Duration);
}

/// Wall clock backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}
