use crate::error::EngineError;
use crate::interaction::Interaction;
use crate::layout::ScreenPoint;
use crate::Result;
use ktane_core::rules::keypad::{self, KeypadSymbol};
use ktane_core::ModuleKind;
use ktane_cv::classify;
use ktane_cv::detection::keypad::detect_keypad;
use ktane_cv::detection::Frame;
use ktane_cv::traits::Classifier;
use ktane_cv::{Alphabet, Crop};

/// Reading order, matching the detector
const KEYS: [ScreenPoint; 4] = [(905, 510), (1005, 510), (905, 600), (1005, 600)];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadSolver {
    pub symbols: [KeypadSymbol; 4],
}

impl KeypadSolver {
    pub fn detect(frame: &Frame, classifier: &dyn Classifier) -> Result<Self> {
        let glyphs = detect_keypad(frame)
            .ok_or(EngineError::detection(ModuleKind::Keypad, "expected four keys"))?;
        let crops: Vec<Crop> = glyphs
            .iter()
            .map(|g| Crop::glyph(g, Alphabet::KeypadSymbol))
            .collect();
        let labels = classify::classify_checked(classifier, Alphabet::KeypadSymbol, &crops)?;

        let mut symbols = [KeypadSymbol::ALL[0]; 4];
        for (symbol, label) in symbols.iter_mut().zip(labels) {
            *symbol = KeypadSymbol::from_label(label).ok_or(EngineError::UnknownLabel {
                what: "keypad symbol",
                label,
            })?;
        }
        Ok(Self { symbols })
    }

    pub fn solve(&self, ctx: &mut Interaction) -> Result<()> {
        for key in keypad::press_order(&self.symbols)? {
            ctx.click_at(KEYS[key]);
        }
        Ok(())
    }
}
