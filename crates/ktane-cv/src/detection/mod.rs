//! Per-module detectors
//!
//! Every detector is a pure function of one frame. Coordinates are relative
//! to the image handed in, which is the zoomed module for module detectors
//! and a cropped bomb edge for the widget detectors.

pub mod complicated_wires;
pub mod config;
pub mod edge;
pub mod indicator;
pub mod keypad;
pub mod maze;
pub mod memory;
pub mod password;
pub mod probes;
pub mod serial;
pub mod simon_says;
pub mod timer;
pub mod whos_on_first;
pub mod wire_sequences;
pub mod wires;

pub use config::DetectionConfig;

use crate::bbox::BBox;
use crate::contour::Contour;
use crate::utils::image::{HsvImage, ImageUtils, Rotation};
use crate::utils::mask::MaskOps;
use image::{GrayImage, RgbImage};

/// One captured image in the color spaces the detectors read
#[derive(Debug, Clone)]
pub struct Frame {
    pub rgb: RgbImage,
    pub hsv: HsvImage,
}

impl Frame {
    pub fn new(rgb: RgbImage) -> Self {
        let hsv = ImageUtils::to_hsv(&rgb);
        Self { rgb, hsv }
    }

    pub fn gray(&self) -> GrayImage {
        ImageUtils::to_gray(&self.rgb)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.rgb.dimensions()
    }

    pub fn crop(&self, bbox: BBox) -> Frame {
        Frame {
            rgb: ImageUtils::crop(&self.rgb, bbox),
            hsv: ImageUtils::crop(&self.hsv, bbox),
        }
    }

    pub fn rotate(&self, rotation: Rotation) -> Frame {
        Frame {
            rgb: ImageUtils::rotate(&self.rgb, rotation),
            hsv: ImageUtils::rotate(&self.hsv, rotation),
        }
    }

    /// Modules render dark while the bomb animates; only read lit frames.
    pub fn is_lit(&self, config: &DetectionConfig) -> bool {
        ImageUtils::mean_value(&self.hsv) > config.lit_brightness
    }
}

/// Gray crop masked by a filled contour, the common first step of the
/// glyph extractors.
pub(crate) fn masked_gray(frame: &Frame, contour: &Contour) -> (GrayImage, GrayImage) {
    let bbox = contour.bbox();
    let gray = ImageUtils::crop(&frame.gray(), bbox);
    let inside = contour.fill(gray.width(), gray.height(), (-bbox.x, -bbox.y));
    (gray, inside)
}

/// Crop a mask down to its non-zero pixels; empty when nothing is set.
pub(crate) fn crop_to_content(mask: &GrayImage) -> GrayImage {
    match MaskOps::nonzero_bounds(mask) {
        Some(bounds) => ImageUtils::crop(mask, bounds),
        None => GrayImage::new(0, 0),
    }
}
