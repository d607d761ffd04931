//! Maze module: 6x6 grid with a white start, a red finish and two green
//! circle markers identifying the layout.

use crate::contour::Contour;
use crate::utils::image::HsvImage;
use crate::utils::mask::ColorRange;
use ktane_core::maze::{CELLS, MarkerKey};

const EMPTY: ColorRange = ColorRange::new([0, 187, 79], [179, 187, 97]);
const START: ColorRange = ColorRange::new([97, 0, 215], [179, 12, 255]);
const FINISH: ColorRange = ColorRange::new([179, 0, 0], [179, 255, 255]);
const MARKER: ColorRange = ColorRange::new([36, 128, 91], [62, 180, 255]);
/// Cell centres within one row differ by less than this in y.
const ROW_STRIDE: i32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeReading {
    pub start: usize,
    pub finish: usize,
    pub key: MarkerKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    Start,
    Finish,
}

/// Row-major order key: y snapped to its row, then x
fn row_major(point: (i32, i32), width: i32) -> i32 {
    (point.1 & !(ROW_STRIDE - 1)) * width + point.0
}

fn distance_sq(a: (i32, i32), b: (i32, i32)) -> i64 {
    let dx = i64::from(a.0 - b.0);
    let dy = i64::from(a.1 - b.1);
    dx * dx + dy * dy
}

pub fn detect_maze(hsv: &HsvImage) -> Option<MazeReading> {
    let centroids = |range: ColorRange| -> Vec<(i32, i32)> {
        Contour::external(&range.segment(hsv))
            .iter()
            .filter_map(Contour::centroid_px)
            .collect()
    };

    let mut cells: Vec<(Cell, (i32, i32))> =
        centroids(EMPTY).into_iter().map(|c| (Cell::Empty, c)).collect();
    cells.push((Cell::Start, *centroids(START).first()?));
    cells.push((Cell::Finish, *centroids(FINISH).first()?));
    if cells.len() != CELLS {
        tracing::debug!(cells = cells.len(), "maze grid incomplete");
        return None;
    }

    let width = hsv.width() as i32;
    cells.sort_by_key(|(_, p)| row_major(*p, width));
    let start = cells.iter().position(|(cell, _)| *cell == Cell::Start)?;
    let finish = cells.iter().position(|(cell, _)| *cell == Cell::Finish)?;

    let markers: Vec<usize> = centroids(MARKER)
        .into_iter()
        .filter_map(|marker| {
            (0..cells.len()).min_by_key(|&i| distance_sq(cells[i].1, marker))
        })
        .collect();
    let &[a, b] = markers.as_slice() else {
        return None;
    };
    Some(MazeReading {
        start,
        finish,
        key: (a.min(b), a.max(b)),
    })
}
