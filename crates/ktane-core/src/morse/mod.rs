//! Morse code blink decoding

pub mod decoder;
pub mod phrases;

pub use decoder::{MorseDecoder, MorseTiming};
pub use phrases::{PHRASES, match_phrase};
