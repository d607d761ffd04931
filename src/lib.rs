//! Bomb-defusal engine for Keep Talking and Nobody Explodes
//!
//! Ties the puzzle rules of `ktane-core` and the detectors of `ktane-cv` to
//! the outside world: screen capture, pointer injection, a clock and an
//! image classifier, all injected as trait objects.

pub mod config;
pub mod error;
pub mod interaction;
pub mod io;
pub mod layout;
pub mod report;
pub mod session;
pub mod solvers;

pub use config::{EngineConfig, GameSettings};
pub use error::EngineError;
pub use interaction::Interaction;
pub use report::{scan_edge, EdgeReport, EdgeScan, Side};
pub use session::{solve_modules, Session};
pub use solvers::Solver;

pub type Result<T> = anyhow::Result<T>;
