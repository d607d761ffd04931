//! Deterministic per-module decision rules.
//!
//! Everything here works on symbolic state only. Detectors and the
//! classifier produce the inputs, the interaction layer turns the outputs
//! into clicks.

pub mod button;
pub mod complicated_wires;
pub mod keypad;
pub mod memory;
pub mod password;
pub mod simon_says;
pub mod whos_on_first;
pub mod wire_sequences;
pub mod wires;

pub use button::{ButtonColor, ButtonText};
pub use complicated_wires::{ComplicatedWire, CutRule, WireTint};
pub use keypad::KeypadSymbol;
pub use memory::MemoryHistory;
pub use password::PasswordColumns;
pub use simon_says::{SimonColor, SimonSequence};
pub use wire_sequences::{SequenceColor, SequenceCounts, SequenceWire, Terminal};
pub use wires::WireColor;
