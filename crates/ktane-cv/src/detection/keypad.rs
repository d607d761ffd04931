//! Keypad module: four symbol keys in a square

use super::{Frame, crop_to_content, masked_gray};
use crate::contour::Contour;
use crate::utils::mask::{ColorRange, MaskOps};
use image::GrayImage;

const KEY: ColorRange = ColorRange::new([0, 0, 194], [30, 46, 255]);
const KEYS: usize = 4;

/// Symbol masks in reading order: top-left, top-right, bottom-left,
/// bottom-right
pub fn detect_keypad(frame: &Frame) -> Option<[GrayImage; KEYS]> {
    let mask = KEY.segment(&frame.hsv);
    let mut keys = Contour::largest(Contour::external(&mask), KEYS);
    if keys.len() != KEYS {
        return None;
    }
    Contour::sort_by_y(&mut keys);
    let (top, bottom) = keys.split_at_mut(2);
    Contour::sort_by_x(top);
    Contour::sort_by_x(bottom);

    let symbols: Vec<GrayImage> = keys.iter().map(|key| symbol(frame, key)).collect();
    symbols.try_into().ok()
}

fn symbol(frame: &Frame, key: &Contour) -> GrayImage {
    let (gray, inside) = masked_gray(frame, key);
    let ink = MaskOps::intersect(&MaskOps::otsu_inv(&gray), &inside);
    crop_to_content(&ink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use imageproc::drawing::draw_filled_rect_mut;
    use imageproc::rect::Rect;

    fn key(rgb: &mut RgbImage, x: i32, y: i32, glyph: (u32, u32)) {
        draw_filled_rect_mut(rgb, Rect::at(x, y).of_size(60, 60), Rgb([235, 230, 220]));
        draw_filled_rect_mut(rgb, Rect::at(x + 20, y + 15).of_size(glyph.0, glyph.1), Rgb([30, 30, 30]));
    }

    #[test]
    fn test_reading_order() {
        let mut rgb = RgbImage::new(200, 200);
        key(&mut rgb, 110, 15, (6, 20));
        key(&mut rgb, 20, 20, (10, 20));
        key(&mut rgb, 110, 110, (14, 20));
        key(&mut rgb, 20, 105, (18, 20));
        let symbols = detect_keypad(&Frame::new(rgb)).unwrap();
        let widths: Vec<u32> = symbols.iter().map(|s| s.width()).collect();
        assert_eq!(widths, vec![10, 6, 18, 14]);
    }

    #[test]
    fn test_missing_key() {
        let mut rgb = RgbImage::new(200, 200);
        key(&mut rgb, 20, 20, (10, 20));
        assert!(detect_keypad(&Frame::new(rgb)).is_none());
    }
}
