use crate::error::RuleError;
use serde::{Deserialize, Serialize};

/// Simple wire colors, in detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WireColor {
    Black,
    Blue,
    Red,
    Yellow,
    White,
}

impl WireColor {
    pub const ALL: [WireColor; 5] = [
        WireColor::Black,
        WireColor::Blue,
        WireColor::Red,
        WireColor::Yellow,
        WireColor::White,
    ];
}

fn count(wires: &[WireColor], color: WireColor) -> usize {
    wires.iter().filter(|&&w| w == color).count()
}

fn last_of(wires: &[WireColor], color: WireColor) -> Option<usize> {
    wires.iter().rposition(|&w| w == color)
}

/// Index (top to bottom) of the single wire to cut.
pub fn cut_index(wires: &[WireColor], serial_is_odd: bool) -> Result<usize, RuleError> {
    use WireColor::*;

    let has = |color| wires.contains(&color);
    let last = wires.last().copied();

    let index = match wires.len() {
        3 => {
            if !has(Red) {
                1
            } else if last == Some(White) {
                2
            } else if count(wires, Blue) > 1 {
                last_of(wires, Blue).unwrap_or(2)
            } else {
                2
            }
        }
        4 => {
            if count(wires, Red) > 1 && serial_is_odd {
                last_of(wires, Red).unwrap_or(3)
            } else if last == Some(Yellow) && !has(Red) {
                0
            } else if count(wires, Blue) == 1 {
                0
            } else if count(wires, Yellow) > 1 {
                3
            } else {
                1
            }
        }
        5 => {
            if last == Some(Black) && serial_is_odd {
                3
            } else if count(wires, Red) == 1 && count(wires, Yellow) > 1 {
                0
            } else if !has(Black) {
                1
            } else {
                0
            }
        }
        6 => {
            if !has(Yellow) && serial_is_odd {
                2
            } else if count(wires, Yellow) == 1 && count(wires, White) > 1 {
                3
            } else if !has(Red) {
                5
            } else {
                3
            }
        }
        n => return Err(RuleError::WireCount(n)),
    };
    Ok(index)
}
