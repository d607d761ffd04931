use crate::error::RuleError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SequenceColor {
    Black,
    Blue,
    Red,
}

impl SequenceColor {
    /// Classifier alphabet `XKBR`; label 0 means no wire.
    pub fn from_label(label: usize) -> Option<Self> {
        match label {
            1 => Some(SequenceColor::Black),
            2 => Some(SequenceColor::Blue),
            3 => Some(SequenceColor::Red),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            SequenceColor::Black => "black",
            SequenceColor::Blue => "blue",
            SequenceColor::Red => "red",
        }
    }
}

/// Right-hand terminal a wire plugs into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terminal {
    A,
    B,
    C,
}

impl Terminal {
    /// Classifier alphabet `XABC`; label 0 means no wire.
    pub fn from_label(label: usize) -> Option<Self> {
        match label {
            1 => Some(Terminal::A),
            2 => Some(Terminal::B),
            3 => Some(Terminal::C),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        match self {
            Terminal::A => A,
            Terminal::B => B,
            Terminal::C => C,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceWire {
    pub color: SequenceColor,
    pub terminal: Terminal,
}

pub const PANELS: usize = 4;
pub const MAX_OCCURRENCES: usize = 9;

const A: u8 = 0b001;
const B: u8 = 0b010;
const C: u8 = 0b100;

/// Terminals to cut on the n-th occurrence of each color.
const RED: [u8; MAX_OCCURRENCES] = [C, B, A, A | C, B, A | C, A | B | C, A | B, B];
const BLUE: [u8; MAX_OCCURRENCES] = [B, A | C, B, A, B, B | C, C, A | C, A];
const BLACK: [u8; MAX_OCCURRENCES] = [A | B | C, A | C, B, A | C, B, B | C, A | B, C, C];

/// Occurrences of each color seen on earlier panels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceCounts {
    pub black: usize,
    pub blue: usize,
    pub red: usize,
}

impl SequenceCounts {
    fn slot(&mut self, color: SequenceColor) -> (&mut usize, &'static [u8; MAX_OCCURRENCES]) {
        match color {
            SequenceColor::Black => (&mut self.black, &BLACK),
            SequenceColor::Blue => (&mut self.blue, &BLUE),
            SequenceColor::Red => (&mut self.red, &RED),
        }
    }

    /// Decide one wire and count its occurrence.
    pub fn cut(&mut self, wire: SequenceWire) -> Result<bool, RuleError> {
        let (count, table) = self.slot(wire.color);
        let cuts = table.get(*count).ok_or(RuleError::TooManyOccurrences {
            color: wire.color.name(),
            limit: MAX_OCCURRENCES,
        })?;
        *count += 1;
        Ok(cuts & wire.terminal.bit() != 0)
    }

    /// Decide a whole panel, top to bottom. Empty slots are skipped.
    pub fn panel(&mut self, wires: &[Option<SequenceWire>; 3]) -> Result<[bool; 3], RuleError> {
        let mut cuts = [false; 3];
        for (cut, wire) in cuts.iter_mut().zip(wires) {
            if let Some(wire) = wire {
                *cut = self.cut(*wire)?;
            }
        }
        Ok(cuts)
    }
}

#[cfg(test)]
mod tests {
    use super::SequenceColor::*;
    use super::Terminal::{self, A, B, C};
    use super::*;

    fn wire(color: SequenceColor, terminal: Terminal) -> Option<SequenceWire> {
        Some(SequenceWire { color, terminal })
    }

    #[test]
    fn counters_carry_across_panels() {
        let mut counts = SequenceCounts::default();
        // First red cuts on C, first blue on B, first black on anything.
        let first = counts.panel(&[wire(Red, C), wire(Blue, A), wire(Black, B)]);
        assert_eq!(first, Ok([true, false, true]));

        // Second red cuts on B, second blue on A or C.
        let second = counts.panel(&[wire(Red, A), None, wire(Blue, C)]);
        assert_eq!(second, Ok([false, false, true]));
        assert_eq!(counts, SequenceCounts { black: 1, blue: 2, red: 2 });
    }

    #[test]
    fn tenth_occurrence_is_an_error() {
        let mut counts = SequenceCounts::default();
        for _ in 0..MAX_OCCURRENCES {
            counts.cut(SequenceWire { color: Blue, terminal: A }).unwrap();
        }
        assert_eq!(
            counts.cut(SequenceWire { color: Blue, terminal: A }),
            Err(RuleError::TooManyOccurrences { color: "blue", limit: 9 })
        );
    }

    #[test]
    fn classifier_labels() {
        assert_eq!(SequenceColor::from_label(0), None);
        assert_eq!(SequenceColor::from_label(1), Some(Black));
        assert_eq!(Terminal::from_label(3), Some(C));
        assert_eq!(Terminal::from_label(4), None);
    }
}
