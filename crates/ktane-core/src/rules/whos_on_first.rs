//! Who's on First lookup tables.
//!
//! Step one reads the display word and names which button label to look at.
//! Step two takes that label's priority list and presses the first listed
//! word present on the panel.

use crate::error::RuleError;

/// Word classifier label order. The empty string is a blank display.
pub const LABELS: [&str; 45] = [
    "blank", "c", "cee", "display", "done", "first", "hold", "hold on", //
    "lead", "led", "leed", "left", "like", "middle", "next", "no", //
    "nothing", "", "okay", "press", "read", "ready", "red", "reed", //
    "right", "says", "see", "sure", "their", "there", "they are", //
    "they're", "u", "uhhh", "uh huh", "uh uh", "ur", "wait", "what", //
    "what?", "yes", "you", "your", "you are", "you're", //
];

/// Display word to the button slot (row-major, 0-5) to read.
static DISPLAY: [(&str, usize); 28] = [
    ("yes", 2),
    ("first", 1),
    ("display", 5),
    ("okay", 1),
    ("says", 5),
    ("nothing", 2),
    ("", 4),
    ("blank", 3),
    ("no", 5),
    ("led", 2),
    ("lead", 5),
    ("read", 3),
    ("red", 3),
    ("reed", 4),
    ("leed", 4),
    ("hold on", 5),
    ("you", 3),
    ("you are", 5),
    ("your", 3),
    ("you're", 3),
    ("ur", 0),
    ("there", 5),
    ("they're", 4),
    ("their", 3),
    ("they are", 2),
    ("see", 5),
    ("c", 1),
    ("cee", 5),
];

type Row = (&'static str, [&'static str; 14]);

static PRIORITY: [Row; 28] = [
    ("ready", ["yes", "okay", "what", "middle", "left", "press", "right", "blank", "ready", "no", "first", "uhhh", "nothing", "wait"]),
    ("first", ["left", "okay", "yes", "middle", "no", "right", "nothing", "uhhh", "wait", "ready", "blank", "what", "press", "first"]),
    ("no", ["blank", "uhhh", "wait", "first", "what", "ready", "right", "yes", "nothing", "left", "press", "okay", "no", "middle"]),
    ("blank", ["wait", "right", "okay", "middle", "blank", "press", "ready", "nothing", "no", "what", "left", "uhhh", "yes", "first"]),
    ("nothing", ["uhhh", "right", "okay", "middle", "yes", "blank", "no", "press", "left", "what", "wait", "first", "nothing", "ready"]),
    ("yes", ["okay", "right", "uhhh", "middle", "first", "what", "press", "ready", "nothing", "yes", "left", "blank", "no", "wait"]),
    ("what", ["uhhh", "what", "left", "nothing", "ready", "blank", "middle", "no", "okay", "first", "wait", "yes", "press", "right"]),
    ("uhhh", ["ready", "nothing", "left", "what", "okay", "yes", "right", "no", "press", "blank", "uhhh", "middle", "wait", "first"]),
    ("left", ["right", "left", "first", "no", "middle", "yes", "blank", "what", "uhhh", "wait", "press", "ready", "okay", "nothing"]),
    ("right", ["yes", "nothing", "ready", "press", "no", "wait", "what", "right", "middle", "left", "uhhh", "blank", "okay", "first"]),
    ("middle", ["blank", "ready", "okay", "what", "nothing", "press", "no", "wait", "left", "middle", "right", "first", "uhhh", "yes"]),
    ("okay", ["middle", "no", "first", "yes", "uhhh", "nothing", "wait", "okay", "left", "ready", "blank", "press", "what", "right"]),
    ("wait", ["uhhh", "no", "blank", "okay", "yes", "left", "first", "press", "what", "wait", "nothing", "ready", "right", "middle"]),
    ("press", ["right", "middle", "yes", "ready", "press", "okay", "nothing", "uhhh", "blank", "left", "first", "what", "no", "wait"]),
    ("you", ["sure", "you are", "your", "you're", "next", "uh huh", "ur", "hold", "what?", "you", "uh uh", "like", "done", "u"]),
    ("you are", ["your", "next", "like", "uh huh", "what?", "done", "uh uh", "hold", "you", "u", "you're", "sure", "ur", "you are"]),
    ("your", ["uh uh", "you are", "uh huh", "your", "next", "ur", "sure", "u", "you're", "you", "what?", "hold", "like", "done"]),
    ("you're", ["you", "you're", "ur", "next", "uh uh", "you are", "u", "your", "what?", "uh huh", "sure", "done", "like", "hold"]),
    ("ur", ["done", "u", "ur", "uh huh", "what?", "sure", "your", "hold", "you're", "like", "next", "uh uh", "you are", "you"]),
    ("u", ["uh huh", "sure", "next", "what?", "you're", "ur", "uh uh", "done", "u", "you", "like", "hold", "you are", "your"]),
    ("uh huh", ["uh huh", "your", "you are", "you", "done", "hold", "uh uh", "next", "sure", "like", "you're", "ur", "u", "what?"]),
    ("uh uh", ["ur", "u", "you are", "you're", "next", "uh uh", "done", "you", "uh huh", "like", "your", "sure", "hold", "what?"]),
    ("what?", ["you", "hold", "you're", "your", "u", "done", "uh uh", "like", "you are", "uh huh", "ur", "next", "what?", "sure"]),
    ("done", ["sure", "uh huh", "next", "what?", "your", "ur", "you're", "hold", "like", "you", "u", "you are", "uh uh", "done"]),
    ("next", ["what?", "uh huh", "uh uh", "your", "hold", "sure", "next", "like", "done", "you are", "ur", "you're", "u", "you"]),
    ("hold", ["you are", "u", "done", "uh uh", "you", "ur", "sure", "what?", "you're", "next", "hold", "uh huh", "your", "like"]),
    ("sure", ["you are", "done", "like", "you're", "you", "hold", "uh huh", "ur", "sure", "u", "what?", "next", "your", "uh uh"]),
    ("like", ["you're", "next", "u", "ur", "hold", "done", "uh uh", "what?", "uh huh", "you", "like", "sure", "you are", "your"]),
];

pub fn label(index: usize) -> Option<&'static str> {
    LABELS.get(index).copied()
}

pub fn display_slot(display: &str) -> Result<usize, RuleError> {
    DISPLAY
        .iter()
        .find(|(word, _)| *word == display)
        .map(|&(_, slot)| slot)
        .ok_or_else(|| RuleError::UnknownDisplay(display.to_string()))
}

pub fn priority(label: &str) -> Option<&'static [&'static str; 14]> {
    PRIORITY
        .iter()
        .find(|(word, _)| *word == label)
        .map(|(_, row)| row)
}

/// Slot (row-major, 0-5) of the button to press for one step.
pub fn choose(display: &str, buttons: &[&str; 6]) -> Result<usize, RuleError> {
    let read = buttons[display_slot(display)?];
    let row = priority(read).ok_or_else(|| RuleError::MissingButton(read.to_string()))?;

    let rank = |word: &str| row.iter().position(|w| *w == word).unwrap_or(usize::MAX);
    (0..buttons.len())
        .min_by_key(|&slot| rank(buttons[slot]))
        .ok_or_else(|| RuleError::MissingButton(read.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_priority_row_lists_itself() {
        for (word, row) in PRIORITY.iter() {
            assert!(row.contains(word), "{word}");
            assert!(LABELS.contains(word));
        }
    }

    #[test]
    fn display_words_are_classifier_labels() {
        for &(word, slot) in DISPLAY.iter() {
            assert!(LABELS.contains(&word), "{word}");
            assert!(slot < 6);
        }
    }

    #[test]
    fn picks_the_highest_priority_button() {
        // "yes" reads slot 2, which says "middle"; "middle" ranks "blank"
        // first, then "ready".
        let buttons = ["press", "first", "middle", "ready", "uhhh", "left"];
        assert_eq!(choose("yes", &buttons), Ok(3));
    }

    #[test]
    fn blank_display_reads_bottom_left() {
        let buttons = ["you", "sure", "done", "next", "u", "like"];
        // Slot 4 says "u", whose list starts with "uh huh", then "sure".
        assert_eq!(choose("", &buttons), Ok(1));
    }

    #[test]
    fn unknown_display_is_an_error() {
        let buttons = ["yes"; 6];
        assert_eq!(
            choose("hello", &buttons),
            Err(RuleError::UnknownDisplay("hello".to_string()))
        );
    }
}
