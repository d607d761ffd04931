//! Seven-segment countdown timer
//!
//! Lit segments are found as bars and classified by orientation and band.
//! Digits are then peeled off right to left: every decision looks at the
//! right-most unused bar of each band and consumes the bars of the digit it
//! recognises, so the next digit's bars end up on top of the stacks.

use crate::contour::Contour;
use crate::utils::image::{HsvImage, ImageUtils};
use crate::utils::mask::{ColorRange, MaskOps};

const TIMER: ColorRange = ColorRange::new([0, 72, 137], [4, 255, 255]);
/// Segments partly covered by the casing reflection
const OCCLUDED: ColorRange = ColorRange::new([170, 24, 115], [179, 133, 255]);
const BAR_AREA: f64 = 100.0;
/// Horizontal bars within this many pixels of the top or bottom edge
const EDGE_BAND: f64 = 20.0;

type Point = (f64, f64);

/// Bar centroids by position, each ordered left to right
#[derive(Debug, Default)]
struct Bars {
    top: Vec<Point>,
    middle: Vec<Point>,
    bottom: Vec<Point>,
    upper: Vec<Point>,
    lower: Vec<Point>,
}

impl Bars {
    fn classify(mask: &image::GrayImage) -> Self {
        let height = f64::from(mask.height());
        let mut segments = Contour::filter_by_area(Contour::external(mask), BAR_AREA);
        Contour::sort_by_x(&mut segments);

        let mut bars = Bars::default();
        for segment in &segments {
            let Some(c) = segment.centroid() else { continue };
            let bbox = segment.bbox();
            if bbox.width > bbox.height {
                if c.1 >= height - EDGE_BAND {
                    bars.bottom.push(c);
                } else if c.1 < EDGE_BAND {
                    bars.top.push(c);
                } else {
                    bars.middle.push(c);
                }
            } else if c.1 < height / 2.0 {
                bars.upper.push(c);
            } else {
                bars.lower.push(c);
            }
        }
        bars
    }

    /// Recognise the right-most digit and drop its bars.
    fn digit(&mut self) -> Option<u8> {
        let upper = self.upper.pop()?;
        let delta = self.top.last().map(|t| t.0 - upper.0);

        // Top bar right of the upper vertical: the left one, so 5 or 6.
        if delta.is_some_and(|d| d > 0.0) {
            self.top.pop()?;
            self.middle.pop()?;
            self.bottom.pop()?;
            self.lower.pop()?;
            if self.lower.last().is_some_and(|l| (upper.0 - l.0).abs() <= 10.0) {
                self.lower.pop();
                return Some(6);
            }
            return Some(5);
        }

        let delta = match delta {
            Some(d) if d >= -30.0 => d,
            _ => {
                self.lower.pop()?;
                if self.middle.last().is_some_and(|m| upper.0 - m.0 <= 30.0) {
                    self.middle.pop();
                    self.upper.pop()?;
                    return Some(4);
                }
                return Some(1);
            }
        };

        if self.middle.last().is_none_or(|m| upper.0 - m.0 > 30.0) {
            self.top.pop()?;
            self.lower.pop()?;
            if self.bottom.last().is_some_and(|b| (upper.0 - b.0).abs() <= 30.0) {
                self.bottom.pop();
                self.upper.pop()?;
                self.lower.pop()?;
                return Some(0);
            }
            return Some(7);
        }

        let top = self.top.pop()?;
        self.middle.pop()?;
        self.bottom.pop()?;
        let lower = self.lower.pop()?;
        if (upper.0 - lower.0).abs() > 30.0 {
            return Some(2);
        }
        if self.upper.last().is_none_or(|u| (top.0 - u.0 + delta).abs() > 10.0) {
            return Some(3);
        }
        self.upper.pop();
        if self.lower.last().is_none_or(|l| (top.0 - l.0 + delta).abs() > 15.0) {
            return Some(9);
        }
        self.lower.pop();
        Some(8)
    }
}

/// Decode a timer mask already cropped to its lit bars.
///
/// Returns `[m1, m2, s1, s2]`; the colon's dots are skipped after the
/// seconds. `None` when the bars do not form four digits.
pub fn decode_segments(mask: &image::GrayImage) -> Option<[u8; 4]> {
    let mut bars = Bars::classify(mask);
    let mut digits = [0u8; 4];
    for i in 0..4 {
        if i == 2 {
            bars.upper.pop()?;
            bars.lower.pop()?;
        }
        digits[3 - i] = bars.digit()?;
    }
    Some(digits)
}

/// Read the countdown from an HSV crop around the timer.
pub fn detect_timer(hsv: &HsvImage) -> Option<[u8; 4]> {
    let mask = MaskOps::union(&TIMER.segment(hsv), &OCCLUDED.segment(hsv));
    let bounds = MaskOps::nonzero_bounds(&mask)?;
    decode_segments(&ImageUtils::crop(&mask, bounds))
}
