//! Per-module solvers and the dispatch from a classified module kind
//!
//! Solvers that need the module's resting state read it from the bomb
//! overview when they are built; the others read everything while zoomed
//! in during `solve`.

pub mod button;
pub mod complicated_wires;
pub mod keypad;
pub mod maze;
pub mod memory;
pub mod morse_code;
pub mod password;
pub mod simon_says;
pub mod whos_on_first;
pub mod wire_sequences;
pub mod wires;

pub use button::ButtonSolver;
pub use complicated_wires::ComplicatedWiresSolver;
pub use keypad::KeypadSolver;
pub use maze::MazeSolver;
pub use memory::MemorySolver;
pub use morse_code::MorseCodeSolver;
pub use password::PasswordSolver;
pub use simon_says::SimonSaysSolver;
pub use whos_on_first::WhosOnFirstSolver;
pub use wire_sequences::WireSequencesSolver;
pub use wires::WiresSolver;

use crate::interaction::Interaction;
use crate::Result;
use anyhow::anyhow;
use ktane_core::ModuleKind;
use ktane_cv::classify;
use ktane_cv::detection::Frame;
use ktane_cv::traits::Classifier;
use ktane_cv::{Alphabet, Crop};
use tracing::info;

#[derive(Debug, Clone)]
pub enum Solver {
    Button(ButtonSolver),
    ComplicatedWires(ComplicatedWiresSolver),
    Keypad(KeypadSolver),
    Maze(MazeSolver),
    Memory(MemorySolver),
    MorseCode(MorseCodeSolver),
    Password(PasswordSolver),
    SimonSays(SimonSaysSolver),
    WhosOnFirst(WhosOnFirstSolver),
    WireSequences(WireSequencesSolver),
    Wires(WiresSolver),
}

/// Build the solver for a module seen at board slot `position`.
///
/// `frame` is the module's crop of the bomb overview. Kinds the engine
/// cannot solve yield `None`.
pub fn build(
    kind: ModuleKind,
    position: usize,
    frame: &Frame,
    classifier: &dyn Classifier,
) -> Result<Option<Solver>> {
    let solver = match kind {
        ModuleKind::Button => Solver::Button(ButtonSolver::detect(position, frame, classifier)?),
        ModuleKind::ComplicatedWires => {
            Solver::ComplicatedWires(ComplicatedWiresSolver::detect(frame))
        }
        ModuleKind::Keypad => Solver::Keypad(KeypadSolver::detect(frame, classifier)?),
        ModuleKind::Maze => Solver::Maze(MazeSolver::detect(frame)?),
        ModuleKind::Memory => Solver::Memory(MemorySolver::new()),
        ModuleKind::MorseCode => Solver::MorseCode(MorseCodeSolver),
        ModuleKind::Password => Solver::Password(PasswordSolver::detect(frame, classifier)?),
        ModuleKind::SimonSays => Solver::SimonSays(SimonSaysSolver),
        ModuleKind::WhosOnFirst => Solver::WhosOnFirst(WhosOnFirstSolver),
        ModuleKind::WireSequences => Solver::WireSequences(WireSequencesSolver::new()),
        ModuleKind::Wires => Solver::Wires(WiresSolver::detect(frame)),
        ModuleKind::CapacitorDischarge
        | ModuleKind::Empty
        | ModuleKind::Knob
        | ModuleKind::Timer
        | ModuleKind::VentingGas => return Ok(None),
    };
    Ok(Some(solver))
}

impl Solver {
    pub fn kind(&self) -> ModuleKind {
        match self {
            Solver::Button(_) => ModuleKind::Button,
            Solver::ComplicatedWires(_) => ModuleKind::ComplicatedWires,
            Solver::Keypad(_) => ModuleKind::Keypad,
            Solver::Maze(_) => ModuleKind::Maze,
            Solver::Memory(_) => ModuleKind::Memory,
            Solver::MorseCode(_) => ModuleKind::MorseCode,
            Solver::Password(_) => ModuleKind::Password,
            Solver::SimonSays(_) => ModuleKind::SimonSays,
            Solver::WhosOnFirst(_) => ModuleKind::WhosOnFirst,
            Solver::WireSequences(_) => ModuleKind::WireSequences,
            Solver::Wires(_) => ModuleKind::Wires,
        }
    }

    /// Solve the module; it must already be zoomed in.
    pub fn solve(&mut self, ctx: &mut Interaction) -> Result<()> {
        info!(module = %self.kind(), "solving");
        match self {
            Solver::Button(solver) => solver.solve(ctx),
            Solver::ComplicatedWires(solver) => solver.solve(ctx),
            Solver::Keypad(solver) => solver.solve(ctx),
            Solver::Maze(solver) => solver.solve(ctx),
            Solver::Memory(solver) => solver.solve(ctx),
            Solver::MorseCode(solver) => solver.solve(ctx),
            Solver::Password(solver) => solver.solve(ctx),
            Solver::SimonSays(solver) => solver.solve(ctx),
            Solver::WhosOnFirst(solver) => solver.solve(ctx),
            Solver::WireSequences(solver) => solver.solve(ctx),
            Solver::Wires(solver) => solver.solve(ctx),
        }
    }
}

/// Classify a single crop.
pub(crate) fn classify_one(classifier: &dyn Classifier, alphabet: Alphabet, crop: Crop) -> Result<usize> {
    let labels = classify::classify_checked(classifier, alphabet, std::slice::from_ref(&crop))?;
    labels
        .first()
        .copied()
        .ok_or_else(|| anyhow!("classifier returned no {alphabet}"))
}
