//! Widgets on the bomb's edges: batteries, parallel ports and the casing
//! markers that frame each edge.

use crate::bbox::BBox;
use crate::contour::Contour;
use crate::utils::image::HsvImage;
use crate::utils::mask::{ColorRange, Kernel, MaskOps};
use tracing::debug;

const BATTERY: ColorRange = ColorRange::new([16, 178, 171], [27, 255, 255]);
const BATTERY_AREA: f64 = 50.0;

const PARALLEL_PORT: ColorRange = ColorRange::new([166, 96, 104], [172, 255, 255]);
const PARALLEL_PORT_AREA: f64 = 1000.0;

const MARKER: ColorRange = ColorRange::new([10, 86, 40], [36, 174, 255]);
/// Each casing marker has two round cut-outs.
const MARKER_HOLES: usize = 2;

/// Every battery shows two colored caps.
pub fn count_batteries(hsv: &HsvImage) -> u32 {
    let mask = MaskOps::close(&BATTERY.segment(hsv), Kernel::K5);
    let caps = Contour::filter_by_area(Contour::external(&mask), BATTERY_AREA);
    (caps.len() / 2) as u32
}

pub fn count_parallel_ports(hsv: &HsvImage) -> u32 {
    let mask = MaskOps::close(&PARALLEL_PORT.segment(hsv), Kernel::K5);
    Contour::filter_by_area(Contour::external(&mask), PARALLEL_PORT_AREA).len() as u32
}

/// Locate the edge between its casing markers.
///
/// Two or three markers must be visible; with three, the top-most belongs
/// to the neighbouring face and is ignored. The returned box spans from the
/// markers' smallest to their largest coordinates, the far edges exclusive.
pub fn detect_side_border(hsv: &HsvImage) -> Option<BBox> {
    let mask = MaskOps::close(&MaskOps::close(&MARKER.segment(hsv), Kernel::K5), Kernel::K5);
    let mut markers: Vec<BBox> = Contour::with_holes(&mask)
        .into_iter()
        .filter(|(_, holes)| *holes == MARKER_HOLES)
        .map(|(contour, _)| contour.bbox())
        .collect();

    match markers.len() {
        2 => {}
        3 => {
            let top = markers
                .iter()
                .enumerate()
                .min_by_key(|(_, b)| b.y)
                .map(|(i, _)| i)?;
            markers.remove(top);
        }
        n => {
            debug!(markers = n, "side border needs two or three markers");
            return None;
        }
    }

    let x0 = markers.iter().map(|b| b.x).min()?;
    let y0 = markers.iter().map(|b| b.y).min()?;
    let x1 = markers.iter().map(|b| b.right() - 1).max()?;
    let y1 = markers.iter().map(|b| b.bottom() - 1).max()?;
    Some(BBox::new(x0, y0, (x1 - x0) as u32, (y1 - y0) as u32))
}
