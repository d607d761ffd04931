//! The nine static maze layouts.
//!
//! Each cell stores a 4-bit adjacency mask: bit 0 opens to the left
//! neighbour, bit 1 to the right, bit 2 upwards and bit 3 downwards.
//! Cells are numbered row-major from the top-left corner.

use crate::error::RuleError;
use serde::{Deserialize, Serialize};

pub const WIDTH: usize = 6;
pub const CELLS: usize = WIDTH * WIDTH;

/// Sorted pair of the cells holding the two green circle markers.
pub type MarkerKey = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Bit order of the adjacency masks.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn bit(self) -> u8 {
        match self {
            Direction::Left => 1 << 0,
            Direction::Right => 1 << 1,
            Direction::Up => 1 << 2,
            Direction::Down => 1 << 3,
        }
    }

    pub fn offset(self) -> isize {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::Up => -(WIDTH as isize),
            Direction::Down => WIDTH as isize,
        }
    }

    pub fn from_delta(delta: isize) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.offset() == delta)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGraph {
    pub key: MarkerKey,
    cells: [u8; CELLS],
}

impl MazeGraph {
    pub fn all() -> &'static [MazeGraph] {
        &MAZES
    }

    /// Select the maze whose circle markers sit on `key`.
    pub fn lookup(key: MarkerKey) -> Result<&'static MazeGraph, RuleError> {
        let key = if key.0 <= key.1 { key } else { (key.1, key.0) };
        MAZES
            .iter()
            .find(|maze| maze.key == key)
            .ok_or(RuleError::UnknownMaze(key))
    }

    pub fn is_open(&self, cell: usize, direction: Direction) -> bool {
        self.cells
            .get(cell)
            .is_some_and(|mask| mask & direction.bit() != 0)
    }

    /// Cell reached by walking `direction`, if no wall is in the way.
    pub fn step(&self, cell: usize, direction: Direction) -> Option<usize> {
        if !self.is_open(cell, direction) {
            return None;
        }
        cell.checked_add_signed(direction.offset())
            .filter(|&next| next < CELLS)
    }

    pub fn neighbours(&self, cell: usize) -> impl Iterator<Item = usize> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.step(cell, direction))
    }
}

static MAZES: [MazeGraph; 9] = [
    MazeGraph {
        key: (6, 17),
        cells: [
            0xA, 0x3, 0x9, 0xA, 0x3, 0x1, //
            0xC, 0xA, 0x5, 0x6, 0x3, 0x9, //
            0xC, 0x6, 0x9, 0xA, 0x3, 0xD, //
            0xC, 0x2, 0x7, 0x5, 0x2, 0xD, //
            0xE, 0x3, 0x9, 0xA, 0x1, 0xC, //
            0x6, 0x1, 0x6, 0x5, 0x2, 0x5, //
        ],
    },
    MazeGraph {
        key: (10, 19),
        cells: [
            0x2, 0xB, 0x1, 0xA, 0xB, 0x1, //
            0xA, 0x5, 0xA, 0x5, 0x6, 0x9, //
            0xC, 0xA, 0x5, 0xA, 0x3, 0xD, //
            0xE, 0x5, 0xA, 0x5, 0x8, 0xC, //
            0xC, 0x8, 0xC, 0xA, 0x5, 0xC, //
            0x4, 0x6, 0x5, 0x6, 0x3, 0x5, //
        ],
    },
    MazeGraph {
        key: (21, 23),
        cells: [
            0xA, 0x3, 0x9, 0x8, 0xA, 0x9, //
            0x4, 0x8, 0xC, 0x6, 0x5, 0xC, //
            0xA, 0xD, 0xC, 0xA, 0x9, 0xC, //
            0xC, 0xC, 0xC, 0xC, 0xC, 0xC, //
            0xC, 0x6, 0x5, 0xC, 0xC, 0xC, //
            0x6, 0x3, 0x3, 0x5, 0x6, 0x5, //
        ],
    },
    MazeGraph {
        key: (0, 18),
        cells: [
            0xA, 0x9, 0x2, 0x3, 0x3, 0x9, //
            0xC, 0xC, 0xA, 0x3, 0x3, 0xD, //
            0xC, 0x6, 0x5, 0xA, 0x1, 0xC, //
            0xC, 0x2, 0x3, 0x7, 0x3, 0xD, //
            0xE, 0x3, 0x3, 0x3, 0x9, 0xC, //
            0x6, 0x3, 0x1, 0x2, 0x5, 0x4, //
        ],
    },
    MazeGraph {
        key: (16, 33),
        cells: [
            0x2, 0x3, 0x3, 0x3, 0xB, 0x9, //
            0xA, 0x3, 0x3, 0xB, 0x5, 0x4, //
            0xE, 0x9, 0x2, 0x5, 0xA, 0x9, //
            0xC, 0x6, 0x3, 0x9, 0x4, 0xC, //
            0xC, 0xA, 0x3, 0x7, 0x1, 0xC, //
            0x4, 0x6, 0x3, 0x3, 0x3, 0x5, //
        ],
    },
    MazeGraph {
        key: (4, 26),
        cells: [
            0x8, 0xA, 0x9, 0x2, 0xB, 0x9, //
            0xC, 0xC, 0xC, 0xA, 0x5, 0xC, //
            0xE, 0x5, 0x4, 0xC, 0xA, 0x5, //
            0x6, 0x9, 0xA, 0xD, 0xC, 0x8, //
            0xA, 0x5, 0x4, 0xC, 0x6, 0xD, //
            0x6, 0x3, 0x3, 0x5, 0x2, 0x5, //
        ],
    },
    MazeGraph {
        key: (1, 31),
        cells: [
            0xA, 0x3, 0x3, 0x9, 0xA, 0x9, //
            0xC, 0xA, 0x1, 0x6, 0x5, 0xC, //
            0x6, 0x5, 0xA, 0x1, 0xA, 0x5, //
            0xA, 0x9, 0xE, 0x3, 0x5, 0x8, //
            0xC, 0x4, 0x6, 0x3, 0x9, 0xC, //
            0x6, 0x3, 0x3, 0x3, 0x7, 0x5, //
        ],
    },
    MazeGraph {
        key: (3, 20),
        cells: [
            0x8, 0xA, 0x3, 0x9, 0xA, 0x9, //
            0xE, 0x7, 0x1, 0x6, 0x5, 0xC, //
            0xC, 0xA, 0x3, 0x3, 0x9, 0xC, //
            0xC, 0x6, 0x9, 0x2, 0x7, 0x5, //
            0xC, 0x8, 0x6, 0x3, 0x3, 0x1, //
            0x6, 0x7, 0x3, 0x3, 0x3, 0x1, //
        ],
    },
    MazeGraph {
        key: (8, 24),
        cells: [
            0x8, 0xA, 0x3, 0x3, 0xB, 0x9, //
            0xC, 0xC, 0xA, 0x1, 0xC, 0xC, //
            0xE, 0x7, 0x5, 0xA, 0x5, 0xC, //
            0xC, 0x8, 0xA, 0x5, 0x2, 0xD, //
            0xC, 0xC, 0xC, 0xA, 0x9, 0x4, //
            0x6, 0x5, 0x6, 0x5, 0x6, 0x1, //
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn opposite(direction: Direction) -> Direction {
        match direction {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    #[test]
    fn passages_are_symmetric_and_stay_on_the_grid() {
        for maze in MazeGraph::all() {
            for cell in 0..CELLS {
                for direction in Direction::ALL {
                    if !maze.is_open(cell, direction) {
                        continue;
                    }
                    let next = maze
                        .step(cell, direction)
                        .unwrap_or_else(|| panic!("{:?}: {cell} leaves the grid", maze.key));
                    let (row, col) = (cell / WIDTH, cell % WIDTH);
                    let (nrow, ncol) = (next / WIDTH, next % WIDTH);
                    assert!(row == nrow || col == ncol, "{:?}: {cell} wraps", maze.key);
                    assert!(maze.is_open(next, opposite(direction)));
                }
            }
        }
    }

    #[test]
    fn lookup_accepts_either_marker_order() {
        assert_eq!(MazeGraph::lookup((17, 6)).map(|m| m.key), Ok((6, 17)));
        assert_eq!(MazeGraph::lookup((2, 5)), Err(RuleError::UnknownMaze((2, 5))));
    }

    #[test]
    fn direction_deltas() {
        assert_eq!(Direction::from_delta(-6), Some(Direction::Up));
        assert_eq!(Direction::from_delta(1), Some(Direction::Right));
        assert_eq!(Direction::from_delta(2), None);
    }
}
