//! Module kinds reported by the board classifier

pub mod kind;

pub use kind::ModuleKind;
