//! Plain wires module

use crate::contour::Contour;
use crate::utils::image::HsvImage;
use crate::utils::mask::ColorRange;
use ktane_core::rules::WireColor;

const WIRE_AREA: f64 = 500.0;

fn range(color: WireColor) -> ColorRange {
    match color {
        WireColor::Black => ColorRange::new([0, 0, 0], [179, 255, 15]),
        WireColor::Blue => ColorRange::new([102, 146, 108], [179, 255, 255]),
        WireColor::Red => ColorRange::new([0, 19, 137], [10, 255, 255]),
        WireColor::Yellow => ColorRange::new([21, 171, 110], [39, 255, 255]),
        WireColor::White => ColorRange::new([0, 11, 94], [33, 58, 255]),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetectedWire {
    pub color: WireColor,
    pub contour: Contour,
}

/// All wires, top to bottom.
///
/// Colors are scanned in a fixed order so wires at the same height keep
/// that order.
pub fn detect_wires(hsv: &HsvImage) -> Vec<DetectedWire> {
    let mut wires: Vec<DetectedWire> = WireColor::ALL
        .iter()
        .flat_map(|&color| {
            let mask = range(color).segment(hsv);
            Contour::filter_by_area(Contour::external(&mask), WIRE_AREA)
                .into_iter()
                .map(move |contour| DetectedWire { color, contour })
        })
        .collect();
    wires.sort_by_key(|w| w.contour.min_y());
    wires
}

pub fn wire_colors(hsv: &HsvImage) -> Vec<WireColor> {
    detect_wires(hsv).into_iter().map(|w| w.color).collect()
}

/// Click targets, one per wire in the same order as [`wire_colors`]
pub fn wire_positions(hsv: &HsvImage) -> Vec<(i32, i32)> {
    detect_wires(hsv)
        .iter()
        .filter_map(|w| w.contour.centroid_px())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use imageproc::drawing::draw_filled_rect_mut;
    use imageproc::rect::Rect;

    fn panel() -> HsvImage {
        // Neutral gray matches no wire color.
        HsvImage::from_pixel(300, 300, Rgb([0, 0, 60]))
    }

    fn wire(hsv: &mut HsvImage, y: i32, color: [u8; 3]) {
        draw_filled_rect_mut(hsv, Rect::at(40, y).of_size(200, 12), Rgb(color));
    }

    #[test]
    fn test_sorted_top_to_bottom() {
        let mut hsv = panel();
        wire(&mut hsv, 200, [0, 0, 5]);
        wire(&mut hsv, 40, [30, 200, 200]);
        wire(&mut hsv, 120, [5, 200, 200]);
        assert_eq!(
            wire_colors(&hsv),
            vec![WireColor::Yellow, WireColor::Red, WireColor::Black]
        );
        assert_eq!(wire_positions(&hsv)[1], (139, 125));
    }

    #[test]
    fn test_short_stubs_are_ignored() {
        let mut hsv = panel();
        wire(&mut hsv, 40, [110, 200, 200]);
        draw_filled_rect_mut(&mut hsv, Rect::at(40, 100).of_size(20, 12), Rgb([10, 30, 200]));
        assert_eq!(wire_colors(&hsv), vec![WireColor::Blue]);
    }
}
