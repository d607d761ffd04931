//! Puzzle logic for the bomb-defusal engine.
//!
//! Everything in this crate is pure: module kinds, the bomb-wide facts read
//! by the solvers, the maze graphs, the Morse decoder and the rule tables for
//! every supported module. Pixels never reach this crate.

pub mod bomb;
pub mod error;
pub mod maze;
pub mod modules;
pub mod morse;
pub mod rules;

pub use bomb::{BombFacts, Indicator};
pub use error::RuleError;
pub use modules::ModuleKind;

pub type Result<T> = std::result::Result<T, RuleError>;
