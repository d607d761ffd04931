//! The big button: tap it, or hold it and release on a timer digit chosen
//! by the strip color.

use super::classify_one;
use crate::error::EngineError;
use crate::interaction::Interaction;
use crate::layout::{self, ScreenPoint};
use crate::Result;
use ktane_core::rules::button::{self, ButtonColor, ButtonText};
use ktane_cv::detection::timer::detect_timer;
use ktane_cv::detection::{probes, Frame};
use ktane_cv::traits::Classifier;
use ktane_cv::{Alphabet, Crop, ImageUtils};
use tracing::debug;

const CENTER: ScreenPoint = (950, 560);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSolver {
    pub color: ButtonColor,
    pub text: ButtonText,
    /// Board slot, which decides where the timer shows while zoomed in
    pub position: usize,
}

impl ButtonSolver {
    pub fn new(color: ButtonColor, text: ButtonText, position: usize) -> Self {
        Self {
            color,
            text,
            position,
        }
    }

    pub fn detect(position: usize, frame: &Frame, classifier: &dyn Classifier) -> Result<Self> {
        let crop = || Crop::Color(frame.rgb.clone());
        let label = classify_one(classifier, Alphabet::ButtonColor, crop())?;
        let color = ButtonColor::from_label(label).ok_or(EngineError::UnknownLabel {
            what: "button color",
            label,
        })?;
        let label = classify_one(classifier, Alphabet::ButtonText, crop())?;
        let text = ButtonText::from_label(label).ok_or(EngineError::UnknownLabel {
            what: "button text",
            label,
        })?;
        Ok(Self::new(color, text, position))
    }

    pub fn solve(&self, ctx: &mut Interaction) -> Result<()> {
        if !button::should_hold(self.color, self.text, ctx.facts()) {
            ctx.click_at(CENTER);
            return Ok(());
        }

        let timer = ctx.facts().timer_position;
        let region = layout::timer_region(timer, self.position).ok_or(EngineError::NoTimerRegion {
            timer,
            button: self.position,
        })?;

        ctx.mov(CENTER).ldn().slp_for(0.5);
        let detection = ctx.config().detection;
        let strip = loop {
            let frame = ctx.grab_active_module()?;
            if let Some(strip) = probes::button_strip(&frame.hsv, &detection) {
                break strip;
            }
        };
        let digit = button::release_digit(strip);
        debug!(?strip, digit, "holding button");

        loop {
            let screen = ctx.grab_screen()?;
            let timer = ImageUtils::to_hsv(&ImageUtils::crop(&screen, region));
            if detect_timer(&timer).is_some_and(|digits| digits.contains(&digit)) {
                break;
            }
        }
        ctx.lup().slp();
        Ok(())
    }
}
