use crate::error::RuleError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimonColor {
    Blue,
    Green,
    Red,
    Yellow,
}

impl SimonColor {
    pub const ALL: [SimonColor; 4] = [
        SimonColor::Blue,
        SimonColor::Green,
        SimonColor::Red,
        SimonColor::Yellow,
    ];
}

/// Color to press for a flash, by serial vowel and strike count.
pub fn respond(flash: SimonColor, has_vowel: bool, strikes: u8) -> Result<SimonColor, RuleError> {
    use SimonColor::*;

    // Answers for a flash of red, blue, green, yellow.
    let row = match (has_vowel, strikes) {
        (true, 0) => [Blue, Red, Yellow, Green],
        (true, 1) => [Yellow, Green, Blue, Red],
        (true, 2) => [Green, Red, Yellow, Blue],
        (false, 0) => [Blue, Yellow, Green, Red],
        (false, 1) => [Red, Blue, Yellow, Green],
        (false, 2) => [Yellow, Green, Blue, Red],
        _ => return Err(RuleError::Strikes(strikes)),
    };
    let column = match flash {
        Red => 0,
        Blue => 1,
        Green => 2,
        Yellow => 3,
    };
    Ok(row[column])
}

/// Flashes learned so far and the presses answering them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimonSequence {
    pub has_vowel: bool,
    pub strikes: u8,
    flashes: Vec<SimonColor>,
}

impl SimonSequence {
    pub fn new(has_vowel: bool) -> Self {
        Self {
            has_vowel,
            strikes: 0,
            flashes: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.flashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flashes.is_empty()
    }

    /// Append a newly seen flash and return the full answer to enter.
    pub fn extend(&mut self, flash: SimonColor) -> Result<Vec<SimonColor>, RuleError> {
        self.flashes.push(flash);
        self.flashes
            .iter()
            .map(|&f| respond(f, self.has_vowel, self.strikes))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::SimonColor::*;
    use super::*;

    #[test]
    fn vowel_mapping_without_strikes() {
        assert_eq!(respond(Red, true, 0), Ok(Blue));
        assert_eq!(respond(Blue, true, 0), Ok(Red));
        assert_eq!(respond(Green, true, 0), Ok(Yellow));
        assert_eq!(respond(Yellow, true, 0), Ok(Green));
    }

    #[test]
    fn no_vowel_mapping() {
        assert_eq!(respond(Blue, false, 0), Ok(Yellow));
        assert_eq!(respond(Green, false, 0), Ok(Green));
        assert_eq!(respond(Green, false, 1), Ok(Yellow));
        assert_eq!(respond(Green, false, 2), Ok(Blue));
    }

    #[test]
    fn each_row_is_a_permutation() {
        for vowel in [true, false] {
            for strikes in 0..3 {
                let mut seen: Vec<_> = SimonColor::ALL
                    .iter()
                    .map(|&c| respond(c, vowel, strikes).unwrap())
                    .collect();
                seen.sort_by_key(|c| *c as u8);
                assert_eq!(seen, SimonColor::ALL.to_vec());
            }
        }
    }

    #[test]
    fn sequence_grows_one_flash_at_a_time() {
        let mut sequence = SimonSequence::new(false);
        assert_eq!(sequence.extend(Red), Ok(vec![Blue]));
        assert_eq!(sequence.extend(Yellow), Ok(vec![Blue, Red]));
        assert_eq!(sequence.len(), 2);
    }

    #[test]
    fn too_many_strikes() {
        assert_eq!(respond(Red, true, 3), Err(RuleError::Strikes(3)));
    }
}
