//! In-memory collaborators for dry runs and tests

use super::{CaptureError, Clock, MouseButton, Pointer, ScreenCapture};
use anyhow::anyhow;
use image::RgbImage;
use ktane_cv::traits::Classifier;
use ktane_cv::{Alphabet, Crop};
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::time::Duration;

/// Clock that only moves when slept on or advanced.
///
/// Clones share the same time, so a capture script can advance the clock
/// the engine reads.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    fn sleep(&mut self, duration: Duration) {
        self.advance(duration);
    }
}

/// Replays queued frames and times out once they run out.
#[derive(Debug, Default)]
pub struct ScriptedCapture {
    frames: VecDeque<Rc<RgbImage>>,
    tick: Option<(ManualClock, Duration)>,
    served: usize,
}

impl ScriptedCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: RgbImage) -> &mut Self {
        self.frames.push_back(Rc::new(frame));
        self
    }

    /// Queue the same frame `times` times without copying it up front.
    pub fn repeat(&mut self, frame: &Rc<RgbImage>, times: usize) -> &mut Self {
        self.frames.extend(std::iter::repeat_n(frame.clone(), times));
        self
    }

    /// Advance `clock` by `interval` on every capture, like a fixed frame rate.
    pub fn with_clock(mut self, clock: ManualClock, interval: Duration) -> Self {
        self.tick = Some((clock, interval));
        self
    }

    pub fn served(&self) -> usize {
        self.served
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl ScreenCapture for ScriptedCapture {
    fn capture(&mut self, timeout: Duration) -> Result<RgbImage, CaptureError> {
        let frame = self.frames.pop_front().ok_or(CaptureError::Timeout(timeout))?;
        if let Some((clock, interval)) = &self.tick {
            clock.advance(*interval);
        }
        self.served += 1;
        Ok(Rc::unwrap_or_clone(frame))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PointerAction {
    Move(i32, i32),
    Down(MouseButton),
    Up(MouseButton),
}

/// Pointer that records every action; clones share one log.
#[derive(Debug, Clone, Default)]
pub struct RecordingPointer {
    log: Rc<RefCell<Vec<PointerAction>>>,
}

impl RecordingPointer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> Vec<PointerAction> {
        self.log.borrow().clone()
    }

    /// Positions of completed left clicks, in order
    pub fn left_clicks(&self) -> Vec<(i32, i32)> {
        let mut at = (0, 0);
        let mut clicks = Vec::new();
        for action in self.log.borrow().iter() {
            match *action {
                PointerAction::Move(x, y) => at = (x, y),
                PointerAction::Up(MouseButton::Left) => clicks.push(at),
                _ => {}
            }
        }
        clicks
    }
}

impl Pointer for RecordingPointer {
    fn move_to(&mut self, x: i32, y: i32) {
        self.log.borrow_mut().push(PointerAction::Move(x, y));
    }

    fn button_down(&mut self, button: MouseButton) {
        self.log.borrow_mut().push(PointerAction::Down(button));
    }

    fn button_up(&mut self, button: MouseButton) {
        self.log.borrow_mut().push(PointerAction::Up(button));
    }
}

/// Answers each classification from a per-alphabet queue of label lists.
#[derive(Debug, Default)]
pub struct ScriptedClassifier {
    answers: RefCell<HashMap<Alphabet, VecDeque<Vec<usize>>>>,
}

impl ScriptedClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(self, alphabet: Alphabet, labels: impl Into<Vec<usize>>) -> Self {
        self.answers
            .borrow_mut()
            .entry(alphabet)
            .or_default()
            .push_back(labels.into());
        self
    }
}

impl Classifier for ScriptedClassifier {
    fn classify(&self, alphabet: Alphabet, crops: &[Crop]) -> ktane_cv::Result<Vec<usize>> {
        self.answers
            .borrow_mut()
            .get_mut(&alphabet)
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| anyhow!("no scripted answer for {} crops of {alphabet}", crops.len()))
    }
}
