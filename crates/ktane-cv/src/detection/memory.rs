//! Memory module: a display digit above four numbered buttons

use super::Frame;
use crate::contour::Contour;
use crate::utils::image::ImageUtils;
use crate::utils::mask::{ColorRange, MaskOps};
use image::GrayImage;

const DIGITS: ColorRange = ColorRange::new([0, 0, 141], [24, 255, 255]);
const BUTTONS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryGlyphs {
    pub display: GrayImage,
    /// Left to right
    pub buttons: [GrayImage; BUTTONS],
}

pub fn detect_memory(frame: &Frame) -> Option<MemoryGlyphs> {
    let mask = DIGITS.segment(&frame.hsv);
    let mut regions = Contour::largest(Contour::external(&mask), BUTTONS + 1);
    if regions.len() != BUTTONS + 1 {
        return None;
    }
    Contour::sort_by_y(&mut regions);
    let display = regions[0].crop_masked(&mask);

    let buttons = &mut regions[1..];
    Contour::sort_by_x(buttons);
    let buttons: Vec<GrayImage> = buttons
        .iter()
        .map(|button| label(frame, button))
        .collect::<Option<_>>()?;
    Some(MemoryGlyphs {
        display,
        buttons: buttons.try_into().ok()?,
    })
}

/// Largest dark blob printed on a button
fn label(frame: &Frame, button: &Contour) -> Option<GrayImage> {
    let gray = ImageUtils::crop(&frame.gray(), button.bbox());
    let ink = MaskOps::otsu_inv(&gray);
    let digit = Contour::largest(Contour::external(&ink), 1).pop()?;
    Some(digit.crop_masked(&ink))
}
