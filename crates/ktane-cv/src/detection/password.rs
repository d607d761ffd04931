//! Password module: five letters on a green display

use super::{Frame, masked_gray};
use crate::contour::Contour;
use crate::utils::mask::{ColorRange, Kernel, MaskOps};
use image::GrayImage;

const DISPLAY: ColorRange = ColorRange::new([34, 207, 169], [58, 255, 255]);

/// Letter masks left to right; `None` without a display
pub fn detect_password(frame: &Frame) -> Option<Vec<GrayImage>> {
    let mask = DISPLAY.segment(&frame.hsv);
    let display = Contour::largest(Contour::external(&mask), 1).pop()?;

    let (gray, inside) = masked_gray(frame, &display);
    let ink = MaskOps::intersect(&MaskOps::otsu_inv(&gray), &inside);
    let ink = MaskOps::close(&ink, Kernel::K5);

    let mut letters = Contour::external(&ink);
    Contour::sort_by_x(&mut letters);
    Some(letters.iter().map(|letter| letter.crop_masked(&ink)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use imageproc::drawing::draw_filled_rect_mut;
    use imageproc::rect::Rect;

    #[test]
    fn test_letters_left_to_right() {
        let mut rgb = RgbImage::new(300, 120);
        draw_filled_rect_mut(&mut rgb, Rect::at(20, 20).of_size(250, 80), Rgb([40, 200, 20]));
        for i in 0..5 {
            let width = 10 + 2 * i as u32;
            draw_filled_rect_mut(&mut rgb, Rect::at(40 + 45 * i, 45).of_size(width, 30), Rgb([10, 40, 10]));
        }
        let letters = detect_password(&Frame::new(rgb)).unwrap();
        let sizes: Vec<(u32, u32)> = letters.iter().map(GrayImage::dimensions).collect();
        assert_eq!(sizes, vec![(10, 30), (12, 30), (14, 30), (16, 30), (18, 30)]);
    }

    #[test]
    fn test_no_display() {
        assert_eq!(detect_password(&Frame::new(RgbImage::new(50, 50))), None);
    }
}
