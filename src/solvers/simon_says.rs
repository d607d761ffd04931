//! Simon Says: watch the flashes, and each time a new one appears enter the
//! mapped answer for the whole sequence.

use crate::interaction::Interaction;
use crate::layout::{self, ScreenPoint, POINTER_REST};
use crate::Result;
use ktane_core::rules::{SimonColor, SimonSequence};
use ktane_cv::detection::simon_says::{detect_simon_says, SimonState, SQUARES};
use tracing::debug;

fn square(color: SimonColor) -> ScreenPoint {
    let index = match color {
        SimonColor::Blue => 0,
        SimonColor::Green => 1,
        SimonColor::Red => 2,
        SimonColor::Yellow => 3,
    };
    let bbox = SQUARES[index].1;
    layout::to_screen((bbox.x, bbox.y))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimonSaysSolver;

impl SimonSaysSolver {
    fn state(ctx: &mut Interaction) -> Result<SimonState> {
        let detection = ctx.config().detection;
        let frame = ctx.grab_active_module()?;
        Ok(detect_simon_says(&frame.hsv, &detection))
    }

    pub fn solve(&self, ctx: &mut Interaction) -> Result<()> {
        let mut sequence = SimonSequence::new(ctx.facts().serial_has_vowel()?);
        // Flashes replayed so far in the current round
        let mut step = 0;

        loop {
            let flash = match Self::state(ctx)? {
                SimonState::Solved => break,
                SimonState::Idle => continue,
                SimonState::Flash(color) => color,
            };

            if step != sequence.len() {
                // A flash the sequence already knows: let it fade.
                loop {
                    match Self::state(ctx)? {
                        SimonState::Solved => return Ok(()),
                        SimonState::Idle => break,
                        SimonState::Flash(_) => {}
                    }
                }
                step += 1;
                continue;
            }

            step = 0;
            let presses = sequence.extend(flash)?;
            debug!(length = presses.len(), ?flash, "simon says round");
            for color in presses {
                ctx.click_at(square(color));
            }
            ctx.mov(POINTER_REST).slp_for(1.25);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_follows_detector_layout() {
        for (color, bbox) in SQUARES {
            assert_eq!(square(color), layout::to_screen((bbox.x, bbox.y)));
        }
        assert_eq!(square(SimonColor::Yellow), (1032, 516));
    }
}
