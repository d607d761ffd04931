use crate::interaction::Interaction;
use crate::layout::ScreenPoint;
use crate::Result;
use ktane_core::rules::complicated_wires::{self, ComplicatedWire};
use ktane_cv::detection::complicated_wires::detect_complicated_wires;
use ktane_cv::detection::Frame;
use tracing::debug;

const WIRE_SLOTS: [ScreenPoint; 6] = [
    (873, 595),
    (909, 595),
    (951, 595),
    (995, 595),
    (1029, 595),
    (1068, 595),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplicatedWiresSolver {
    pub wires: Vec<ComplicatedWire>,
}

impl ComplicatedWiresSolver {
    pub fn detect(frame: &Frame) -> Self {
        let wires = detect_complicated_wires(&frame.hsv);
        debug!(slots = wires.len(), "complicated wires detected");
        Self { wires }
    }

    pub fn solve(&self, ctx: &mut Interaction) -> Result<()> {
        for slot in complicated_wires::slots_to_cut(&self.wires, ctx.facts())? {
            ctx.click_at(WIRE_SLOTS[slot]);
        }
        Ok(())
    }
}
