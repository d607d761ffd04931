//! Memory: five stages, each decided from the display and the history of
//! earlier presses.

use crate::error::EngineError;
use crate::interaction::Interaction;
use crate::layout::{ScreenPoint, POINTER_REST};
use crate::Result;
use ktane_core::rules::memory::{MemoryHistory, STAGES};
use ktane_core::ModuleKind;
use ktane_cv::classify;
use ktane_cv::detection::memory::detect_memory;
use ktane_cv::detection::Frame;
use ktane_cv::traits::Classifier;
use ktane_cv::{Alphabet, Crop};
use tracing::debug;

const BUTTONS: [ScreenPoint; 4] = [(885, 600), (925, 600), (970, 600), (1015, 600)];
/// Time the stage indicator takes to advance
const STAGE_ANIMATION_SECS: f64 = 3.25;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySolver {
    pub history: MemoryHistory,
}

/// Display digit and button labels, each 1-4
fn read_digits(frame: &Frame, classifier: &dyn Classifier) -> Result<(u8, [u8; 4])> {
    let glyphs = detect_memory(frame)
        .ok_or(EngineError::detection(ModuleKind::Memory, "expected a display and four buttons"))?;
    let crops: Vec<Crop> = std::iter::once(&glyphs.display)
        .chain(&glyphs.buttons)
        .map(|g| Crop::glyph(g, Alphabet::MemoryDigit))
        .collect();
    let labels = classify::classify_checked(classifier, Alphabet::MemoryDigit, &crops)?;

    let mut digits = [0u8; 5];
    for (digit, label) in digits.iter_mut().zip(labels) {
        *digit = u8::try_from(label + 1)?;
    }
    let [display, buttons @ ..] = digits;
    Ok((display, buttons))
}

impl MemorySolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn solve(&mut self, ctx: &mut Interaction) -> Result<()> {
        while !self.history.is_complete() {
            let frame = ctx.wait_for_lit_module()?;
            let (shown, buttons) = read_digits(&frame, ctx.classifier())?;
            let pressed = self.history.step(shown, buttons)?;
            debug!(stage = self.history.stage(), display = shown, ?buttons, pressed, "memory stage");

            ctx.click_at(BUTTONS[pressed]);
            if self.history.stage() != STAGES {
                ctx.mov(POINTER_REST).slp_for(STAGE_ANIMATION_SECS);
            }
        }
        Ok(())
    }
}
