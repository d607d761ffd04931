//! Simon Says lamp states

use super::DetectionConfig;
use crate::bbox::BBox;
use crate::utils::image::{HsvImage, ImageUtils};
use crate::utils::mask::{ColorRange, MaskOps};
use ktane_core::rules::SimonColor;

const BRIGHT: ColorRange = ColorRange::new([0, 0, 200], [179, 255, 255]);
const SOLVED_LAMP: BBox = BBox::new(244, 10, 32, 32);

/// Centre patch of each colored square, in the order they are checked
pub const SQUARES: [(SimonColor, BBox); 4] = [
    (SimonColor::Blue, BBox::new(138, 69, 16, 16)),
    (SimonColor::Green, BBox::new(138, 187, 16, 16)),
    (SimonColor::Red, BBox::new(78, 129, 16, 16)),
    (SimonColor::Yellow, BBox::new(200, 129, 16, 16)),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimonState {
    Solved,
    Flash(SimonColor),
    Idle,
}

fn bright_pixels(hsv: &HsvImage, bbox: BBox) -> usize {
    MaskOps::count_nonzero(&BRIGHT.segment(&ImageUtils::crop(hsv, bbox)))
}

pub fn detect_simon_says(hsv: &HsvImage, config: &DetectionConfig) -> SimonState {
    if bright_pixels(hsv, SOLVED_LAMP) > config.lamp_pixels {
        return SimonState::Solved;
    }
    SQUARES
        .iter()
        .find(|(_, bbox)| bright_pixels(hsv, *bbox) > config.lamp_pixels)
        .map_or(SimonState::Idle, |(color, _)| SimonState::Flash(*color))
}
