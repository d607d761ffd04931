use crate::bomb::BombFacts;
use crate::error::RuleError;
use serde::{Deserialize, Serialize};

/// Coloring of a complicated wire, including the striped mixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WireTint {
    Red,
    Blue,
    White,
    BlueWhite,
    RedWhite,
    BlueRed,
}

impl WireTint {
    pub fn has_red(self) -> bool {
        matches!(self, WireTint::Red | WireTint::RedWhite | WireTint::BlueRed)
    }

    pub fn has_blue(self) -> bool {
        matches!(self, WireTint::Blue | WireTint::BlueWhite | WireTint::BlueRed)
    }
}

/// One of the six slots: LED above, star below, optional wire between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplicatedWire {
    pub led: bool,
    pub star: bool,
    pub tint: Option<WireTint>,
}

/// Venn diagram outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutRule {
    Cut,
    DontCut,
    /// Cut if the last serial digit is even.
    SerialEven,
    /// Cut if the bomb has a parallel port.
    ParallelPort,
    /// Cut if the bomb has two or more batteries.
    TwoBatteries,
}

/// Diagram indexed by `red << 3 | blue << 2 | led << 1 | star`.
const DIAGRAM: [CutRule; 16] = {
    use CutRule::*;
    [
        Cut, Cut, DontCut, TwoBatteries, //
        SerialEven, DontCut, ParallelPort, ParallelPort, //
        SerialEven, Cut, TwoBatteries, TwoBatteries, //
        SerialEven, ParallelPort, SerialEven, DontCut, //
    ]
};

impl CutRule {
    pub fn lookup(red: bool, blue: bool, led: bool, star: bool) -> Self {
        let index = usize::from(red) << 3
            | usize::from(blue) << 2
            | usize::from(led) << 1
            | usize::from(star);
        DIAGRAM[index]
    }

    pub fn should_cut(self, facts: &BombFacts) -> Result<bool, RuleError> {
        Ok(match self {
            CutRule::Cut => true,
            CutRule::DontCut => false,
            CutRule::SerialEven => facts.serial_is_even()?,
            CutRule::ParallelPort => facts.parallel_ports > 0,
            CutRule::TwoBatteries => facts.batteries >= 2,
        })
    }
}

impl ComplicatedWire {
    /// `None` for an empty slot.
    pub fn rule(&self) -> Option<CutRule> {
        self.tint
            .map(|tint| CutRule::lookup(tint.has_red(), tint.has_blue(), self.led, self.star))
    }
}

/// Slots whose wire must be cut, left to right.
pub fn slots_to_cut(
    wires: &[ComplicatedWire],
    facts: &BombFacts,
) -> Result<Vec<usize>, RuleError> {
    let mut slots = Vec::new();
    for (slot, wire) in wires.iter().enumerate() {
        let Some(rule) = wire.rule() else { continue };
        if rule.should_cut(facts)? {
            slots.push(slot);
        }
    }
    Ok(slots)
}
