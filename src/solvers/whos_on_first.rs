use crate::error::EngineError;
use crate::interaction::Interaction;
use crate::layout::{ScreenPoint, POINTER_REST};
use crate::Result;
use ktane_core::rules::whos_on_first;
use ktane_core::ModuleKind;
use ktane_cv::classify;
use ktane_cv::detection::whos_on_first::detect_whos_on_first;
use ktane_cv::detection::Frame;
use ktane_cv::traits::Classifier;
use ktane_cv::{Alphabet, Crop};
use tracing::debug;

/// Reading order: left then right, top row first
const BUTTONS: [ScreenPoint; 6] = [(910, 515), (995, 515), (910, 565), (995, 565), (910, 610), (995, 610)];
const STEPS: usize = 3;
const STEP_ANIMATION_SECS: f64 = 3.5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WhosOnFirstSolver;

/// Display word and the six button words
fn read_words(frame: &Frame, classifier: &dyn Classifier) -> Result<(&'static str, [&'static str; 6])> {
    let glyphs = detect_whos_on_first(frame).ok_or(EngineError::detection(
        ModuleKind::WhosOnFirst,
        "expected a display and six buttons",
    ))?;
    let crops: Vec<Crop> = std::iter::once(&glyphs.display)
        .chain(&glyphs.buttons)
        .map(|g| Crop::glyph(g, Alphabet::WhosOnFirstWord))
        .collect();
    let labels = classify::classify_checked(classifier, Alphabet::WhosOnFirstWord, &crops)?;

    let mut words = [""; 7];
    for (word, label) in words.iter_mut().zip(labels) {
        *word = whos_on_first::label(label).ok_or(EngineError::UnknownLabel {
            what: "who's on first word",
            label,
        })?;
    }
    let [display, buttons @ ..] = words;
    Ok((display, buttons))
}

impl WhosOnFirstSolver {
    pub fn solve(&self, ctx: &mut Interaction) -> Result<()> {
        for step in 0..STEPS {
            if step > 0 {
                ctx.slp_for(STEP_ANIMATION_SECS);
            }
            let frame = ctx.wait_for_lit_module()?;
            let (shown, buttons) = read_words(&frame, ctx.classifier())?;
            let press = whos_on_first::choose(shown, &buttons)?;
            debug!(step, display = shown, ?buttons, press, "who's on first step");
            ctx.click_at(BUTTONS[press]).mov(POINTER_REST);
        }
        Ok(())
    }
}
