//! Typed failures of the detection layer

use crate::classify::Alphabet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectionError {
    #[error("classifier returned {got} {alphabet} labels for {expected} crops")]
    LabelCount {
        alphabet: Alphabet,
        expected: usize,
        got: usize,
    },

    #[error("label {label} is outside the {alphabet} alphabet")]
    LabelOutOfRange { alphabet: Alphabet, label: usize },
}
