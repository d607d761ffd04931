//! Labelled indicator lamps on the bomb's edges

use super::{Frame, masked_gray};
use crate::Result;
use crate::classify::{self, Alphabet, Crop};
use crate::contour::Contour;
use crate::traits::Classifier;
use crate::utils::image::ImageUtils;
use crate::utils::mask::{ColorRange, Kernel, MaskOps};
use image::GrayImage;
use ktane_core::Indicator;
use tracing::debug;

const BORDER: ColorRange = ColorRange::new([0, 30, 0], [6, 255, 232]);
const BORDER_AREA: f64 = 100.0;
const LETTERS: ColorRange = ColorRange::new([18, 0, 191], [179, 30, 255]);
const LETTER_AREA: f64 = 50.0;
const BLOB_LEVEL: u8 = 160;
const BLOB_AREA: f64 = 100.0;

/// Letters of one indicator, left to right, and whether its lamp is on
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorGlyphs {
    pub lit: bool,
    pub letters: Vec<GrayImage>,
}

pub fn detect_indicators(frame: &Frame) -> Vec<IndicatorGlyphs> {
    let border = MaskOps::close(&BORDER.segment(&frame.hsv), Kernel::K5);
    Contour::external(&border)
        .iter()
        .filter(|c| c.area() >= BORDER_AREA)
        .filter_map(|c| extract(frame, c))
        .collect()
}

fn extract(frame: &Frame, border: &Contour) -> Option<IndicatorGlyphs> {
    let bbox = border.bbox();
    let letters = LETTERS.segment(&ImageUtils::crop(&frame.hsv, bbox));
    let letter_count = Contour::filter_by_area(Contour::external(&letters), LETTER_AREA).len();
    if letter_count != 3 {
        debug!(letter_count, ?bbox, "indicator candidate rejected");
        return None;
    }

    let (gray, inside) = masked_gray(frame, border);
    let blobs = MaskOps::threshold(&MaskOps::apply(&gray, &inside), BLOB_LEVEL);
    let mut symbols = Contour::filter_by_area(Contour::external(&blobs), BLOB_AREA);
    Contour::sort_by_x(&mut symbols);

    let lit = match symbols.len() {
        3 => false,
        // The lamp sits left of the label.
        4 => {
            symbols.remove(0);
            true
        }
        _ => return None,
    };

    Some(IndicatorGlyphs {
        lit,
        letters: symbols.iter().map(|s| s.crop_masked(&blobs)).collect(),
    })
}

/// Detect every indicator in the frame and spell its label.
pub fn read_indicators(frame: &Frame, classifier: &dyn Classifier) -> Result<Vec<Indicator>> {
    let found = detect_indicators(frame);
    let crops: Vec<Crop> = found
        .iter()
        .flat_map(|i| i.letters.iter())
        .map(|g| Crop::glyph(g, Alphabet::IndicatorLetter))
        .collect();
    let labels = classify::classify_checked(classifier, Alphabet::IndicatorLetter, &crops)?;

    let letters = classify::INDICATOR_LETTERS.as_bytes();
    Ok(found
        .iter()
        .zip(labels.chunks(3))
        .map(|(glyphs, chunk)| {
            let label: String = chunk.iter().map(|&l| char::from(letters[l])).collect();
            Indicator::new(glyphs.lit, label)
        })
        .collect())
}
