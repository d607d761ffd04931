//! Small fixed-region probes polled while a module is being worked on

use super::DetectionConfig;
use crate::bbox::BBox;
use crate::utils::image::{HsvImage, ImageUtils};
use crate::utils::mask::{ColorRange, MaskOps};
use ktane_core::rules::ButtonColor;

/// Lit strip beside a held button
pub const BUTTON_STRIP: BBox = BBox::new(240, 137, 16, 16);
pub const MORSE_BLINKER: BBox = BBox::new(94, 35, 16, 16);

const BLINKER: ColorRange = ColorRange::new([0, 177, 198], [34, 255, 255]);

fn strip_range(color: ButtonColor) -> ColorRange {
    match color {
        ButtonColor::Blue => ColorRange::new([99, 209, 0], [118, 255, 255]),
        ButtonColor::Red => ColorRange::new([0, 194, 0], [0, 255, 255]),
        ButtonColor::White => ColorRange::new([0, 0, 197], [0, 0, 255]),
        ButtonColor::Yellow => ColorRange::new([23, 212, 0], [31, 255, 255]),
    }
}

/// Strip color, `None` while the strip has not lit up yet
pub fn button_strip(hsv: &HsvImage, config: &DetectionConfig) -> Option<ButtonColor> {
    let strip = ImageUtils::crop(hsv, BUTTON_STRIP);
    ButtonColor::ALL.into_iter().find(|&color| {
        MaskOps::count_nonzero(&strip_range(color).segment(&strip)) >= config.strip_pixels
    })
}

pub fn morse_blinker_lit(hsv: &HsvImage, config: &DetectionConfig) -> bool {
    let blinker = ImageUtils::crop(hsv, MORSE_BLINKER);
    MaskOps::count_nonzero(&BLINKER.segment(&blinker)) > config.lamp_pixels
}
