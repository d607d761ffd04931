use crate::interaction::Interaction;
use crate::layout::ScreenPoint;
use crate::Result;
use ktane_core::morse::{MorseDecoder, PHRASES};
use ktane_cv::detection::probes::morse_blinker_lit;
use tracing::info;

const RIGHT_ARROW: ScreenPoint = (1065, 560);
const TRANSMIT: ScreenPoint = (980, 625);

/// Watches the blinker until the phrase is unambiguous, then dials its
/// frequency and transmits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MorseCodeSolver;

impl MorseCodeSolver {
    pub fn solve(&self, ctx: &mut Interaction) -> Result<()> {
        let detection = ctx.config().detection;
        let mut decoder = MorseDecoder::new(ctx.config().morse);
        let index = loop {
            let frame = ctx.grab_active_module()?;
            let lit = morse_blinker_lit(&frame.hsv, &detection);
            if let Some(index) = decoder.feed(lit, ctx.now()) {
                break index;
            }
        };
        let word = PHRASES.get(index).map_or("?", |(word, _)| *word);
        info!(word, code = decoder.code(), "morse phrase decoded");

        if index != 0 {
            ctx.mov(RIGHT_ARROW);
        }
        for _ in 0..index {
            ctx.ldn().lup().slp();
        }
        ctx.click_at(TRANSMIT);
        Ok(())
    }
}
