use crate::error::EngineError;
use crate::interaction::Interaction;
use crate::layout::ScreenPoint;
use crate::Result;
use ktane_core::maze::{self, Direction};
use ktane_core::ModuleKind;
use ktane_cv::detection::maze::{detect_maze, MazeReading};
use ktane_cv::detection::Frame;
use tracing::debug;

fn arrow(direction: Direction) -> ScreenPoint {
    match direction {
        Direction::Left => (850, 535),
        Direction::Right => (1080, 535),
        Direction::Up => (970, 425),
        Direction::Down => (970, 650),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeSolver {
    pub reading: MazeReading,
}

impl MazeSolver {
    pub fn detect(frame: &Frame) -> Result<Self> {
        let reading = detect_maze(&frame.hsv)
            .ok_or(EngineError::detection(ModuleKind::Maze, "grid or markers not found"))?;
        Ok(Self { reading })
    }

    pub fn solve(&self, ctx: &mut Interaction) -> Result<()> {
        let MazeReading { start, finish, key } = self.reading;
        let moves = maze::solve(key, start, finish)?;
        debug!(?key, start, finish, moves = moves.len(), "maze path");
        for direction in moves {
            ctx.click_at(arrow(direction));
        }
        Ok(())
    }
}
