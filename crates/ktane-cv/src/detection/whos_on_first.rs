//! Who's on First: a word display above two columns of three buttons

use super::{Frame, crop_to_content};
use crate::contour::Contour;
use crate::utils::image::ImageUtils;
use crate::utils::mask::{ColorRange, MaskOps};
use image::GrayImage;

const DISPLAY: ColorRange = ColorRange::new([88, 41, 80], [111, 110, 126]);
const BUTTON: ColorRange = ColorRange::new([0, 0, 135], [24, 126, 255]);
const DISPLAY_AREA: f64 = 1500.0;
const BUTTONS: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct WhosOnFirstGlyphs {
    pub display: GrayImage,
    /// Reading order: left then right, top row first
    pub buttons: [GrayImage; BUTTONS],
}

pub fn detect_whos_on_first(frame: &Frame) -> Option<WhosOnFirstGlyphs> {
    Some(WhosOnFirstGlyphs {
        display: display_word(frame)?,
        buttons: button_labels(frame)?,
    })
}

/// Bright text inside the first wide display-colored region
fn display_word(frame: &Frame) -> Option<GrayImage> {
    let mask = DISPLAY.segment(&frame.hsv);
    let display = Contour::external(&mask).into_iter().find(|c| {
        let bbox = c.bbox();
        bbox.width > bbox.height && c.area() >= DISPLAY_AREA
    })?;

    let bbox = display.bbox();
    let gray = ImageUtils::crop(&frame.gray(), bbox);
    let hull = Contour::new(imageproc::geometry::convex_hull(&display.points[..]));
    let inside = hull.fill(gray.width(), gray.height(), (-bbox.x, -bbox.y));
    let text = MaskOps::intersect(&MaskOps::otsu(&gray), &inside);
    Some(crop_to_content(&text))
}

fn button_labels(frame: &Frame) -> Option<[GrayImage; BUTTONS]> {
    let mask = BUTTON.segment(&frame.hsv);
    let mut buttons = Contour::largest(Contour::external(&mask), BUTTONS);
    if buttons.len() != BUTTONS {
        return None;
    }
    Contour::sort_by_x(&mut buttons);
    let (left, right) = buttons.split_at_mut(BUTTONS / 2);
    Contour::sort_by_y(left);
    Contour::sort_by_y(right);

    let labels: Vec<GrayImage> = left
        .iter()
        .zip(right.iter())
        .flat_map(|(l, r)| [l, r])
        .map(|button| {
            let bbox = button.bbox();
            let face = ImageUtils::crop(&mask, bbox);
            let filled = button.fill(face.width(), face.height(), (-bbox.x, -bbox.y));
            crop_to_content(&MaskOps::xor(&filled, &face))
        })
        .collect();
    labels.try_into().ok()
}
