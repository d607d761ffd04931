use super::graph::{CELLS, Direction, MarkerKey, MazeGraph};
use crate::error::RuleError;
use std::collections::VecDeque;

/// Breadth-first search from `start` to `finish`.
///
/// Returns the visited cells including both endpoints. Edges are unweighted,
/// so the first time `finish` is reached the path is a shortest one.
pub fn shortest_path(
    maze: &MazeGraph,
    start: usize,
    finish: usize,
) -> Result<Vec<usize>, RuleError> {
    for cell in [start, finish] {
        if cell >= CELLS {
            return Err(RuleError::CellOutOfRange(cell));
        }
    }

    let mut visited = [false; CELLS];
    let mut pred: [Option<usize>; CELLS] = [None; CELLS];
    let mut queue = VecDeque::from([start]);
    visited[start] = true;

    while let Some(cell) = queue.pop_front() {
        if cell == finish {
            break;
        }
        for next in maze.neighbours(cell) {
            if visited[next] {
                continue;
            }
            visited[next] = true;
            pred[next] = Some(cell);
            queue.push_back(next);
        }
    }

    if !visited[finish] {
        return Err(RuleError::Unreachable { start, finish });
    }

    let mut path = vec![finish];
    let mut crawl = finish;
    while let Some(prev) = pred[crawl] {
        path.push(prev);
        crawl = prev;
    }
    path.reverse();
    Ok(path)
}

/// Turn consecutive cells into arrow presses.
///
/// `None` when two cells are not orthogonal neighbours.
pub fn directions(path: &[usize]) -> Option<Vec<Direction>> {
    path.windows(2)
        .map(|pair| Direction::from_delta(pair[1] as isize - pair[0] as isize))
        .collect()
}

/// Walk `moves` from `start`, failing on the first wall.
pub fn replay(maze: &MazeGraph, start: usize, moves: &[Direction]) -> Option<usize> {
    moves
        .iter()
        .try_fold(start, |cell, &direction| maze.step(cell, direction))
}

/// Full maze answer: select the graph, search, and convert to presses.
pub fn solve(key: MarkerKey, start: usize, finish: usize) -> Result<Vec<Direction>, RuleError> {
    let maze = MazeGraph::lookup(key)?;
    let path = shortest_path(maze, start, finish)?;
    directions(&path).ok_or(RuleError::Unreachable { start, finish })
}
