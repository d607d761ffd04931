use serde::{Deserialize, Serialize};
use std::fmt;

/// The sixteen module types the board classifier can report.
///
/// Variant order is the classifier's label order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleKind {
    Button,
    CapacitorDischarge,
    ComplicatedWires,
    Empty,
    Keypad,
    Knob,
    Maze,
    Memory,
    MorseCode,
    Password,
    SimonSays,
    Timer,
    VentingGas,
    WhosOnFirst,
    Wires,
    WireSequences,
}

impl ModuleKind {
    pub const ALL: [ModuleKind; 16] = [
        ModuleKind::Button,
        ModuleKind::CapacitorDischarge,
        ModuleKind::ComplicatedWires,
        ModuleKind::Empty,
        ModuleKind::Keypad,
        ModuleKind::Knob,
        ModuleKind::Maze,
        ModuleKind::Memory,
        ModuleKind::MorseCode,
        ModuleKind::Password,
        ModuleKind::SimonSays,
        ModuleKind::Timer,
        ModuleKind::VentingGas,
        ModuleKind::WhosOnFirst,
        ModuleKind::Wires,
        ModuleKind::WireSequences,
    ];

    /// Map a classifier label back to a kind.
    pub fn from_label(label: usize) -> Option<Self> {
        Self::ALL.get(label).copied()
    }

    /// Needy modules rearm forever and are never solved.
    pub fn is_needy(self) -> bool {
        matches!(
            self,
            ModuleKind::CapacitorDischarge | ModuleKind::Knob | ModuleKind::VentingGas
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            ModuleKind::Button => "button",
            ModuleKind::CapacitorDischarge => "capacitor discharge",
            ModuleKind::ComplicatedWires => "complicated wires",
            ModuleKind::Empty => "empty",
            ModuleKind::Keypad => "keypad",
            ModuleKind::Knob => "knob",
            ModuleKind::Maze => "maze",
            ModuleKind::Memory => "memory",
            ModuleKind::MorseCode => "morse code",
            ModuleKind::Password => "password",
            ModuleKind::SimonSays => "simon says",
            ModuleKind::Timer => "timer",
            ModuleKind::VentingGas => "venting gas",
            ModuleKind::WhosOnFirst => "who's on first",
            ModuleKind::Wires => "wires",
            ModuleKind::WireSequences => "wire sequences",
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
