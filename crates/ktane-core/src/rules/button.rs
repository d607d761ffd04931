use crate::bomb::BombFacts;
use serde::{Deserialize, Serialize};

/// Button body color, also used for the lit strip while holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonColor {
    Blue,
    Red,
    White,
    Yellow,
}

impl ButtonColor {
    pub const ALL: [ButtonColor; 4] = [
        ButtonColor::Blue,
        ButtonColor::Red,
        ButtonColor::White,
        ButtonColor::Yellow,
    ];

    pub fn from_label(label: usize) -> Option<Self> {
        Self::ALL.get(label).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonText {
    Abort,
    Detonate,
    Hold,
    Press,
}

impl ButtonText {
    pub const ALL: [ButtonText; 4] = [
        ButtonText::Abort,
        ButtonText::Detonate,
        ButtonText::Hold,
        ButtonText::Press,
    ];

    pub fn from_label(label: usize) -> Option<Self> {
        Self::ALL.get(label).copied()
    }
}

/// Whether the button must be held rather than tapped.
///
/// Rules are checked in manual order; the first one that applies wins.
pub fn should_hold(color: ButtonColor, text: ButtonText, facts: &BombFacts) -> bool {
    use ButtonColor::*;
    use ButtonText::*;

    if color == Blue && text == Abort {
        true
    } else if facts.batteries > 1 && text == Detonate {
        false
    } else if color == White && facts.has_lit_indicator("CAR") {
        true
    } else if facts.batteries > 2 && facts.has_lit_indicator("FRK") {
        false
    } else if color == Yellow {
        true
    } else {
        !(color == Red && text == Hold)
    }
}

/// Timer digit to release on, given the strip lit while holding.
pub fn release_digit(strip: ButtonColor) -> u8 {
    match strip {
        ButtonColor::Blue => 4,
        ButtonColor::Yellow => 5,
        ButtonColor::Red | ButtonColor::White => 1,
    }
}
