use thiserror::Error;

/// Failures of the deterministic rule layer.
///
/// Any of these means the engine and the physical puzzle disagree, so
/// callers treat them as fatal for the module being solved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("serial number has not been read")]
    MissingSerial,

    #[error("serial number `{0}` does not end with a digit")]
    SerialWithoutDigit(String),

    #[error("no maze is keyed by marker cells {0:?}")]
    UnknownMaze((usize, usize)),

    #[error("maze cell {0} is outside the 6x6 grid")]
    CellOutOfRange(usize),

    #[error("finish cell {finish} is unreachable from {start}")]
    Unreachable { start: usize, finish: usize },

    #[error("no keypad column holds all of {0}")]
    NoKeypadColumn(String),

    #[error("unsupported wire count {0}")]
    WireCount(usize),

    #[error("memory stage {stage} cannot resolve display {display}")]
    MemoryStage { stage: usize, display: u8 },

    #[error("button label {0} is not on the panel")]
    MissingButton(String),

    #[error("unknown display word `{0}`")]
    UnknownDisplay(String),

    #[error("{color} wire seen more than {limit} times")]
    TooManyOccurrences { color: &'static str, limit: usize },

    #[error("strike count {0} has no simon says mapping")]
    Strikes(u8),
}
