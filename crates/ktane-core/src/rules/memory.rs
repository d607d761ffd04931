use crate::error::RuleError;
use serde::{Deserialize, Serialize};

pub const STAGES: usize = 5;

/// One solved stage: the four button labels and the slot pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStage {
    pub buttons: [u8; 4],
    pub pressed: usize,
}

impl MemoryStage {
    pub fn label(&self) -> u8 {
        self.buttons[self.pressed]
    }
}

/// Presses made so far. Later stages refer back to earlier positions and
/// labels, so the history is threaded through every step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryHistory {
    stages: Vec<MemoryStage>,
}

fn slot_of(buttons: &[u8; 4], label: u8) -> Result<usize, RuleError> {
    buttons
        .iter()
        .position(|&b| b == label)
        .ok_or_else(|| RuleError::MissingButton(label.to_string()))
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> usize {
        self.stages.len()
    }

    pub fn stages(&self) -> &[MemoryStage] {
        &self.stages
    }

    pub fn is_complete(&self) -> bool {
        self.stages.len() == STAGES
    }

    fn earlier(&self, stage: usize) -> Result<&MemoryStage, RuleError> {
        self.stages.get(stage).ok_or(RuleError::MemoryStage {
            stage: self.stage(),
            display: 0,
        })
    }

    /// Decide the slot (0-3) for this stage without recording it.
    pub fn choose(&self, display: u8, buttons: &[u8; 4]) -> Result<usize, RuleError> {
        let stage = self.stage();
        let unresolved = RuleError::MemoryStage { stage, display };

        let slot = match (stage, display) {
            (0, 1 | 2) => 1,
            (0, 3) => 2,
            (0, 4) => 3,

            (1, 1) => slot_of(buttons, 4)?,
            (1, 3) => 0,
            (1, 2 | 4) => self.earlier(0)?.pressed,

            (2, 1) => slot_of(buttons, self.earlier(1)?.label())?,
            (2, 2) => slot_of(buttons, self.earlier(0)?.label())?,
            (2, 3) => 2,
            (2, 4) => slot_of(buttons, 4)?,

            (3, 1) => self.earlier(0)?.pressed,
            (3, 2) => 0,
            (3, 3 | 4) => self.earlier(1)?.pressed,

            (4, 1) => slot_of(buttons, self.earlier(0)?.label())?,
            (4, 2) => slot_of(buttons, self.earlier(1)?.label())?,
            (4, 3) => slot_of(buttons, self.earlier(3)?.label())?,
            (4, 4) => slot_of(buttons, self.earlier(2)?.label())?,

            _ => return Err(unresolved),
        };
        Ok(slot)
    }

    /// Decide and record the press for the next stage.
    pub fn step(&mut self, display: u8, buttons: [u8; 4]) -> Result<usize, RuleError> {
        let pressed = self.choose(display, &buttons)?;
        self.stages.push(MemoryStage { buttons, pressed });
        Ok(pressed)
    }
}
