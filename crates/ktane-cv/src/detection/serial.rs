//! Serial number sticker

use super::Frame;
use crate::Result;
use crate::classify::{self, Alphabet};
use crate::contour::Contour;
use crate::traits::Classifier;
use crate::utils::image::ImageUtils;
use crate::utils::mask::{ColorRange, Kernel, MaskOps};
use image::GrayImage;

const STICKER: ColorRange = ColorRange::new([0, 0, 109], [36, 43, 255]);
const STICKER_AREA: f64 = 6000.0;
const INK_LEVEL: u8 = 50;
const SYMBOL_AREA: f64 = 100.0;
pub const SERIAL_LEN: usize = 6;

/// Symbol masks of the first sticker showing exactly six characters
pub fn detect_serial(frame: &Frame) -> Option<Vec<GrayImage>> {
    let sticker = MaskOps::open(&STICKER.segment(&frame.hsv), Kernel::K3);
    let gray = frame.gray();
    Contour::external(&sticker)
        .iter()
        .filter(|c| c.area() >= STICKER_AREA)
        .find_map(|c| extract(&ImageUtils::crop(&gray, c.bbox())))
}

fn extract(gray: &GrayImage) -> Option<Vec<GrayImage>> {
    let ink = MaskOps::threshold_inv(gray, INK_LEVEL);
    let mut symbols: Vec<Contour> = Contour::external(&ink)
        .into_iter()
        .filter(|c| c.area() >= SYMBOL_AREA)
        .filter(|c| {
            let b = c.bbox();
            b.width <= b.height
        })
        .collect();
    if symbols.len() != SERIAL_LEN {
        return None;
    }
    Contour::sort_by_x(&mut symbols);
    Some(symbols.iter().map(|s| s.crop_masked(&ink)).collect())
}

/// Read the serial number, `None` when no sticker is visible.
pub fn read_serial(frame: &Frame, classifier: &dyn Classifier) -> Result<Option<String>> {
    match detect_serial(frame) {
        Some(glyphs) => {
            classify::read_text(classifier, Alphabet::SerialSymbol, &glyphs).map(Some)
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Crop;
    use image::{Rgb, RgbImage};
    use imageproc::drawing::draw_filled_rect_mut;
    use imageproc::rect::Rect;

    struct Counting;

    impl Classifier for Counting {
        fn classify(&self, alphabet: Alphabet, crops: &[Crop]) -> Result<Vec<usize>> {
            assert_eq!(alphabet, Alphabet::SerialSymbol);
            Ok((0..crops.len()).map(|i| 10 + i).collect())
        }
    }

    fn fill(rgb: &mut RgbImage, x: i32, y: i32, w: u32, h: u32, color: [u8; 3]) {
        draw_filled_rect_mut(rgb, Rect::at(x, y).of_size(w, h), Rgb(color));
    }

    fn sticker(symbols: usize) -> Frame {
        let mut rgb = RgbImage::new(300, 120);
        fill(&mut rgb, 20, 20, 240, 60, [230, 230, 220]);
        for i in 0..symbols as i32 {
            fill(&mut rgb, 40 + 35 * i, 30, 14, 30, [20, 20, 20]);
        }
        // A dash is wider than tall and never a serial character.
        fill(&mut rgb, 235, 65, 20, 8, [20, 20, 20]);
        Frame::new(rgb)
    }

    #[test]
    fn test_six_symbols() {
        let glyphs = detect_serial(&sticker(6)).unwrap();
        assert_eq!(glyphs.len(), 6);
        assert!(glyphs.iter().all(|g| g.dimensions() == (14, 30)));
    }

    #[test]
    fn test_wrong_symbol_count() {
        assert_eq!(detect_serial(&sticker(5)), None);
    }

    #[test]
    fn test_read_serial() {
        assert_eq!(read_serial(&sticker(6), &Counting).unwrap(), Some("ABCDEF".to_string()));
        let blank = Frame::new(RgbImage::new(50, 50));
        assert_eq!(read_serial(&blank, &Counting).unwrap(), None);
    }
}
