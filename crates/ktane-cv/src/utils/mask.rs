//! Binary masks: color segmentation, arithmetic and morphology
//!
//! A mask is a `GrayImage` where 255 marks foreground and 0 background.

use super::image::HsvImage;
use crate::bbox::BBox;
use image::{GrayImage, Luma, Rgb};
use imageproc::contrast::{self, ThresholdType};
use imageproc::distance_transform::Norm;
use imageproc::morphology;
use serde::{Deserialize, Serialize};

pub const FOREGROUND: Luma<u8> = Luma([255]);

/// Inclusive HSV bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRange {
    pub lo: [u8; 3],
    pub hi: [u8; 3],
}

impl ColorRange {
    pub const fn new(lo: [u8; 3], hi: [u8; 3]) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, Rgb(px): Rgb<u8>) -> bool {
        (0..3).all(|c| self.lo[c] <= px[c] && px[c] <= self.hi[c])
    }

    /// Segment an HSV image: 255 where the pixel lies inside the range
    pub fn segment(&self, hsv: &HsvImage) -> GrayImage {
        let mut mask = GrayImage::new(hsv.width(), hsv.height());
        for (dst, src) in mask.pixels_mut().zip(hsv.pixels()) {
            if self.contains(*src) {
                *dst = FOREGROUND;
            }
        }
        mask
    }
}

/// Square structuring element side length, odd
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel(pub u8);

impl Kernel {
    pub const K3: Kernel = Kernel(3);
    pub const K5: Kernel = Kernel(5);

    fn radius(self) -> u8 {
        self.0 / 2
    }
}

fn zip_with(a: &GrayImage, b: &GrayImage, f: impl Fn(bool, bool) -> bool) -> GrayImage {
    debug_assert_eq!(a.dimensions(), b.dimensions());
    let mut out = GrayImage::new(a.width(), a.height());
    for ((dst, pa), pb) in out.pixels_mut().zip(a.pixels()).zip(b.pixels()) {
        if f(pa[0] != 0, pb[0] != 0) {
            *dst = FOREGROUND;
        }
    }
    out
}

/// Mask arithmetic and morphology
pub struct MaskOps;

impl MaskOps {
    pub fn union(a: &GrayImage, b: &GrayImage) -> GrayImage {
        zip_with(a, b, |x, y| x || y)
    }

    pub fn intersect(a: &GrayImage, b: &GrayImage) -> GrayImage {
        zip_with(a, b, |x, y| x && y)
    }

    /// Foreground of `a` not covered by `b`
    pub fn subtract(a: &GrayImage, b: &GrayImage) -> GrayImage {
        zip_with(a, b, |x, y| x && !y)
    }

    pub fn xor(a: &GrayImage, b: &GrayImage) -> GrayImage {
        zip_with(a, b, |x, y| x != y)
    }

    /// Keep gray values where `mask` is set, zero elsewhere
    pub fn apply(gray: &GrayImage, mask: &GrayImage) -> GrayImage {
        let mut out = gray.clone();
        for (dst, m) in out.pixels_mut().zip(mask.pixels()) {
            if m[0] == 0 {
                *dst = Luma([0]);
            }
        }
        out
    }

    pub fn close(mask: &GrayImage, kernel: Kernel) -> GrayImage {
        morphology::close(mask, Norm::LInf, kernel.radius())
    }

    pub fn open(mask: &GrayImage, kernel: Kernel) -> GrayImage {
        morphology::open(mask, Norm::LInf, kernel.radius())
    }

    pub fn dilate(mask: &GrayImage, kernel: Kernel) -> GrayImage {
        morphology::dilate(mask, Norm::LInf, kernel.radius())
    }

    pub fn count_nonzero(mask: &GrayImage) -> usize {
        mask.pixels().filter(|p| p[0] != 0).count()
    }

    /// Bounding box of all non-zero pixels
    pub fn nonzero_bounds(mask: &GrayImage) -> Option<BBox> {
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for (x, y, p) in mask.enumerate_pixels() {
            if p[0] == 0 {
                continue;
            }
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }
        bounds.map(|(x0, y0, x1, y1)| BBox::from_corners(x0 as i32, y0 as i32, x1 as i32, y1 as i32))
    }

    /// Fixed threshold: `value > level` becomes foreground
    pub fn threshold(gray: &GrayImage, level: u8) -> GrayImage {
        contrast::threshold(gray, level, ThresholdType::Binary)
    }

    /// Fixed threshold: `value <= level` becomes foreground
    pub fn threshold_inv(gray: &GrayImage, level: u8) -> GrayImage {
        contrast::threshold(gray, level, ThresholdType::BinaryInverted)
    }

    /// Otsu threshold
    pub fn otsu(gray: &GrayImage) -> GrayImage {
        Self::threshold(gray, contrast::otsu_level(gray))
    }

    /// Inverted Otsu threshold, for dark glyphs on light panels
    pub fn otsu_inv(gray: &GrayImage) -> GrayImage {
        Self::threshold_inv(gray, contrast::otsu_level(gray))
    }
}
