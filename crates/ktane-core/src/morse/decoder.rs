use super::phrases::match_phrase;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Duration thresholds, in seconds, separating the morse symbols.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MorseTiming {
    /// Pulses longer than this are dashes.
    pub dash_secs: f64,
    /// Dark gaps shorter than this separate symbols of one letter.
    pub letter_gap_secs: f64,
    /// Dark gaps longer than this are the pause between repetitions.
    pub word_gap_secs: f64,
}

impl Default for MorseTiming {
    fn default() -> Self {
        Self {
            dash_secs: 0.7,
            letter_gap_secs: 0.5,
            word_gap_secs: 1.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Light may be mid-pulse; wait for it to go dark.
    AwaitDark,
    /// Dark seen; the next rising edge starts the first full pulse.
    AwaitLight,
    Decoding { lit: bool, since: Duration },
    Done(usize),
}

/// Edge-triggered decoder fed with one blinker sample at a time.
///
/// Timestamps are monotonic and caller-provided, so the decoder has no
/// clock of its own and can be driven from recorded samples.
#[derive(Debug, Clone)]
pub struct MorseDecoder {
    timing: MorseTiming,
    phase: Phase,
    code: String,
}

impl MorseDecoder {
    pub fn new(timing: MorseTiming) -> Self {
        Self {
            timing,
            phase: Phase::AwaitDark,
            code: String::new(),
        }
    }

    /// Symbols decoded so far.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn answer(&self) -> Option<usize> {
        match self.phase {
            Phase::Done(index) => Some(index),
            _ => None,
        }
    }

    /// Feed one sample; returns the phrase index once it is unambiguous.
    pub fn feed(&mut self, lit: bool, now: Duration) -> Option<usize> {
        match self.phase {
            Phase::Done(index) => return Some(index),
            Phase::AwaitDark => {
                if !lit {
                    self.phase = Phase::AwaitLight;
                }
            }
            Phase::AwaitLight => {
                if lit {
                    self.phase = Phase::Decoding { lit, since: now };
                }
            }
            Phase::Decoding { lit: was_lit, since } => {
                if lit == was_lit {
                    return None;
                }
                self.phase = Phase::Decoding { lit, since: now };
                let elapsed = now.saturating_sub(since).as_secs_f64();
                let symbol = if was_lit {
                    Some(if elapsed > self.timing.dash_secs { '-' } else { '.' })
                } else if elapsed < self.timing.letter_gap_secs {
                    None
                } else if elapsed > self.timing.word_gap_secs {
                    Some('/')
                } else {
                    Some(' ')
                };

                if let Some(symbol) = symbol {
                    self.code.push(symbol);
                    if let Some(index) = match_phrase(&self.code) {
                        self.phase = Phase::Done(index);
                    }
                }
            }
        }
        self.answer()
    }
}

impl Default for MorseDecoder {
    fn default() -> Self {
        Self::new(MorseTiming::default())
    }
}
