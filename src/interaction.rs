//! The context solvers act through: capture, pointer, clock and classifier
//! plus the facts gathered about the bomb.

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::io::{CaptureError, Clock, MouseButton, Pointer, ScreenCapture};
use crate::layout::{self, ScreenPoint};
use crate::Result;
use image::RgbImage;
use ktane_core::BombFacts;
use ktane_cv::detection::Frame;
use ktane_cv::traits::Classifier;
use ktane_cv::ImageUtils;
use std::time::Duration;
use tracing::{debug, warn};

pub struct Interaction {
    capture: Box<dyn ScreenCapture>,
    pointer: Box<dyn Pointer>,
    clock: Box<dyn Clock>,
    classifier: Box<dyn Classifier>,
    config: EngineConfig,
    pub facts: BombFacts,
}

impl Interaction {
    pub fn new(
        capture: Box<dyn ScreenCapture>,
        pointer: Box<dyn Pointer>,
        clock: Box<dyn Clock>,
        classifier: Box<dyn Classifier>,
        config: EngineConfig,
    ) -> Self {
        Self {
            capture,
            pointer,
            clock,
            classifier,
            config,
            facts: BombFacts::default(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    pub fn facts(&self) -> &BombFacts {
        &self.facts
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    pub fn mov(&mut self, (x, y): ScreenPoint) -> &mut Self {
        self.pointer.move_to(x, y);
        self
    }

    pub fn ldn(&mut self) -> &mut Self {
        self.pointer.button_down(MouseButton::Left);
        self
    }

    pub fn lup(&mut self) -> &mut Self {
        self.pointer.button_up(MouseButton::Left);
        self
    }

    pub fn rdn(&mut self) -> &mut Self {
        self.pointer.button_down(MouseButton::Right);
        self
    }

    pub fn rup(&mut self) -> &mut Self {
        self.pointer.button_up(MouseButton::Right);
        self
    }

    /// Short pause so the game registers the last input
    pub fn slp(&mut self) -> &mut Self {
        let secs = self.config.settle_secs;
        self.slp_for(secs)
    }

    pub fn slp_for(&mut self, secs: f64) -> &mut Self {
        let duration = self.config.scaled(secs);
        if !duration.is_zero() {
            self.clock.sleep(duration);
        }
        self
    }

    /// Move, left click and settle.
    pub fn click_at(&mut self, point: ScreenPoint) -> &mut Self {
        self.mov(point).ldn().lup().slp()
    }

    pub fn grab_screen(&mut self) -> Result<RgbImage> {
        let timeout = self.config.capture_timeout();
        let screen = self.capture.capture(timeout).map_err(|e| match e {
            CaptureError::Timeout(after) => EngineError::CaptureTimeout(after),
            CaptureError::Backend(reason) => EngineError::Capture(reason),
        })?;
        Ok(screen)
    }

    /// The zoomed-in module of the current frame
    pub fn grab_active_module(&mut self) -> Result<Frame> {
        let screen = self.grab_screen()?;
        Ok(Frame::new(ImageUtils::crop(&screen, layout::ZOOMED_MODULE)))
    }

    /// Poll until the zoomed module is fully lit.
    pub fn wait_for_lit_module(&mut self) -> Result<Frame> {
        let mut polls = 0usize;
        loop {
            let frame = self.grab_active_module()?;
            if frame.is_lit(&self.config.detection) {
                if polls > 0 {
                    debug!(polls, "module lit");
                }
                return Ok(frame);
            }
            polls += 1;
            if polls % 100 == 0 {
                warn!(polls, "module still dark");
            }
        }
    }
}
