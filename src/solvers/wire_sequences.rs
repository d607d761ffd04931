use crate::interaction::Interaction;
use crate::layout::ScreenPoint;
use crate::Result;
use ktane_core::rules::wire_sequences::PANELS;
use ktane_core::rules::SequenceCounts;
use ktane_cv::detection::wire_sequences::read_panel;
use tracing::debug;

const WIRES: [ScreenPoint; 3] = [(910, 490), (910, 530), (910, 575)];
const NEXT_PANEL: ScreenPoint = (950, 635);
const PANEL_ANIMATION_SECS: f64 = 2.0;

/// Occurrence counts carry over from panel to panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WireSequencesSolver {
    pub counts: SequenceCounts,
}

impl WireSequencesSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn solve(&mut self, ctx: &mut Interaction) -> Result<()> {
        for panel in 0..PANELS {
            let frame = ctx.wait_for_lit_module()?;
            let wires = read_panel(&frame, ctx.classifier())?;
            let cuts = self.counts.panel(&wires)?;
            debug!(panel, ?wires, ?cuts, "wire sequence panel");

            for (&point, cut) in WIRES.iter().zip(cuts) {
                if cut {
                    ctx.click_at(point);
                }
            }
            ctx.mov(NEXT_PANEL).ldn().lup();
            if panel + 1 < PANELS {
                ctx.slp_for(PANEL_ANIMATION_SECS);
            } else {
                ctx.slp();
            }
        }
        Ok(())
    }
}
