//! Maze graphs and shortest-path search

pub mod graph;
pub mod search;

pub use graph::{CELLS, Direction, MarkerKey, MazeGraph};
pub use search::{directions, replay, shortest_path, solve};
