use serde::{Deserialize, Serialize};

pub const WORDS: [&str; 35] = [
    "about", "after", "again", "below", "could", //
    "every", "first", "found", "great", "house", //
    "large", "learn", "never", "other", "place", //
    "plant", "point", "right", "small", "sound", //
    "spell", "still", "study", "their", "there", //
    "these", "thing", "think", "three", "water", //
    "where", "which", "world", "would", "write", //
];

pub const COLUMNS: usize = 5;
/// Letters on each spinner.
pub const SPINNER: usize = 6;
/// Scroll iterations before every spinner letter has been seen.
pub const MAX_REVEALS: usize = SPINNER - 1;

/// Letters seen so far on each spinner, most recent first.
///
/// Each reveal scrolls every spinner one step down, so index `j` of a
/// column is the letter that was showing `j` scrolls ago.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordColumns {
    columns: [Vec<char>; COLUMNS],
}

impl PasswordColumns {
    pub fn new(initial: [char; COLUMNS]) -> Self {
        Self {
            columns: initial.map(|c| vec![c.to_ascii_lowercase()]),
        }
    }

    /// Record the letters showing after one more scroll.
    pub fn reveal(&mut self, letters: [char; COLUMNS]) {
        for (column, letter) in self.columns.iter_mut().zip(letters) {
            column.insert(0, letter.to_ascii_lowercase());
        }
    }

    pub fn column(&self, index: usize) -> &[char] {
        &self.columns[index]
    }

    fn admits(&self, word: &str) -> bool {
        word.chars()
            .zip(&self.columns)
            .all(|(letter, column)| column.contains(&letter))
    }

    /// Words spellable from the letters seen so far, in table order.
    pub fn candidates(&self) -> Vec<&'static str> {
        WORDS.into_iter().filter(|w| self.admits(w)).collect()
    }

    /// The answer, once exactly one word remains possible.
    pub fn unique_match(&self) -> Option<&'static str> {
        match self.candidates().as_slice() {
            [word] => Some(*word),
            _ => None,
        }
    }

    /// Clicks per spinner that bring `word` into view; negative values
    /// scroll up, positive ones scroll down.
    pub fn rotations(&self, word: &str) -> Option<[i32; COLUMNS]> {
        let mut clicks = [0; COLUMNS];
        for ((click, column), letter) in clicks.iter_mut().zip(&self.columns).zip(word.chars()) {
            let age = column.iter().position(|&c| c == letter)?;
            *click = rotation(age);
        }
        Some(clicks)
    }
}

/// Shortest spin for a letter seen `age` scrolls ago.
pub fn rotation(age: usize) -> i32 {
    2 - ((age + 2) % SPINNER) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns_for(rows: &[&str]) -> PasswordColumns {
        let row = |s: &str| -> [char; COLUMNS] {
            let chars: Vec<char> = s.chars().collect();
            [chars[0], chars[1], chars[2], chars[3], chars[4]]
        };
        let mut columns = PasswordColumns::new(row(rows[0]));
        for r in &rows[1..] {
            columns.reveal(row(r));
        }
        columns
    }

    #[test]
    fn narrows_to_a_single_word() {
        let columns = columns_for(&["WHERE", "BOIUF"]);
        assert_eq!(columns.unique_match(), Some("where"));
    }

    #[test]
    fn ambiguous_letters_keep_gathering() {
        let columns = columns_for(&["THERE", "THRSE"]);
        assert_eq!(columns.candidates(), vec!["there", "these"]);
        assert_eq!(columns.unique_match(), None);
    }

    #[test]
    fn rotations_point_back_at_the_answer() {
        let columns = columns_for(&["ABOUT", "XFTER", "YBOVE"]);
        // a: 2 scrolls ago, b: now, o: now, u: 2 scrolls ago, t: 2 ago.
        assert_eq!(columns.rotations("about"), Some([-2, 0, 0, -2, -2]));
        assert_eq!(columns.rotations("zzzzz"), None);
    }

    #[test]
    fn rotation_range_and_round_trip() {
        for age in 0..SPINNER {
            let clicks = rotation(age);
            assert!((-3..=2).contains(&clicks), "{age} -> {clicks}");
            // Scrolling back `age` steps and forward `clicks` lands on zero.
            assert_eq!((age as i32 + clicks).rem_euclid(SPINNER as i32), 0);
        }
    }
}
