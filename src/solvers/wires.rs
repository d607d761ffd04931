use crate::error::EngineError;
use crate::interaction::Interaction;
use crate::layout;
use crate::Result;
use ktane_core::rules::wires::{self, WireColor};
use ktane_core::ModuleKind;
use ktane_cv::detection::wires::{wire_colors, wire_positions};
use ktane_cv::detection::Frame;
use tracing::debug;

/// Colors are read from the overview; the cut position is read again once
/// zoomed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WiresSolver {
    pub colors: Vec<WireColor>,
}

impl WiresSolver {
    pub fn detect(frame: &Frame) -> Self {
        Self {
            colors: wire_colors(&frame.hsv),
        }
    }

    pub fn solve(&self, ctx: &mut Interaction) -> Result<()> {
        let index = wires::cut_index(&self.colors, ctx.facts().serial_is_odd()?)?;
        debug!(colors = ?self.colors, index, "cutting wire");

        let frame = ctx.wait_for_lit_module()?;
        let positions = wire_positions(&frame.hsv);
        let &target = positions
            .get(index)
            .ok_or(EngineError::detection(ModuleKind::Wires, "wire to cut not found"))?;
        ctx.click_at(layout::to_screen(target));
        Ok(())
    }
}
