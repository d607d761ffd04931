//! Bomb-wide facts shared by every solver

pub mod facts;

pub use facts::{BombFacts, Indicator};
