//! Image loading, color conversion and resizing

use crate::bbox::BBox;
use crate::Result;
use anyhow::Context;
use image::imageops::{self, FilterType};
use image::{GrayImage, ImageBuffer, Luma, Pixel, Rgb, RgbImage};
use std::path::Path;

/// Three-channel image holding `(h, s, v)` instead of `(r, g, b)`.
///
/// Hue follows the 8-bit convention of halved degrees (0..=179), saturation
/// and value span 0..=255.
pub type HsvImage = RgbImage;

/// Quarter turns applied to edge-side crops to bring widgets upright
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    None,
    Clockwise,
    CounterClockwise,
    HalfTurn,
}

/// Image utility functions
pub struct ImageUtils;

impl ImageUtils {
    /// Load image as RGB
    pub fn load_color<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
        let img = image::open(&path)
            .with_context(|| format!("Failed to open image: {:?}", path.as_ref()))?;
        Ok(img.to_rgb8())
    }

    /// Convert one RGB pixel to 8-bit HSV
    pub fn rgb_to_hsv_pixel(Rgb([r, g, b]): Rgb<u8>) -> Rgb<u8> {
        let (rf, gf, bf) = (f64::from(r), f64::from(g), f64::from(b));
        let v = r.max(g).max(b);
        let min = r.min(g).min(b);
        let diff = f64::from(v - min);

        let s = if v == 0 {
            0
        } else {
            (255.0 * diff / f64::from(v)).round() as u8
        };

        let h = if diff == 0.0 {
            0.0
        } else if v == r {
            60.0 * (gf - bf) / diff
        } else if v == g {
            120.0 + 60.0 * (bf - rf) / diff
        } else {
            240.0 + 60.0 * (rf - gf) / diff
        };
        let h = if h < 0.0 { h + 360.0 } else { h };
        let h = ((h / 2.0).round() as u16).min(179);

        Rgb([h as u8, s, v])
    }

    /// Convert an RGB frame to HSV
    pub fn to_hsv(rgb: &RgbImage) -> HsvImage {
        let mut hsv = RgbImage::new(rgb.width(), rgb.height());
        for (dst, src) in hsv.pixels_mut().zip(rgb.pixels()) {
            *dst = Self::rgb_to_hsv_pixel(*src);
        }
        hsv
    }

    /// Convert an RGB frame to gray with BT.601 luma weights
    pub fn to_gray(rgb: &RgbImage) -> GrayImage {
        let mut gray = GrayImage::new(rgb.width(), rgb.height());
        for (dst, Rgb([r, g, b])) in gray.pixels_mut().zip(rgb.pixels()) {
            let luma = 0.299 * f64::from(*r) + 0.587 * f64::from(*g) + 0.114 * f64::from(*b);
            *dst = Luma([luma.round() as u8]);
        }
        gray
    }

    /// Copy out the part of `image` covered by `bbox`, clipped to the image
    pub fn crop<Px>(image: &ImageBuffer<Px, Vec<u8>>, bbox: BBox) -> ImageBuffer<Px, Vec<u8>>
    where
        Px: Pixel<Subpixel = u8> + 'static,
    {
        match bbox.clamp_to(image.width(), image.height()) {
            Some(b) => {
                imageops::crop_imm(image, b.x as u32, b.y as u32, b.width, b.height).to_image()
            }
            None => ImageBuffer::new(0, 0),
        }
    }

    /// Mean of the value channel, used as a "module is lit" gate
    pub fn mean_value(hsv: &HsvImage) -> f64 {
        let count = u64::from(hsv.width()) * u64::from(hsv.height());
        if count == 0 {
            return 0.0;
        }
        let total: u64 = hsv.pixels().map(|p| u64::from(p[2])).sum();
        total as f64 / count as f64
    }

    /// Downscale to fit `width` x `height` keeping the aspect ratio, then
    /// zero-pad symmetrically to exactly that size.
    ///
    /// Odd padding puts the extra row or column after the content.
    pub fn fit_image_size(image: &GrayImage, width: u32, height: u32) -> GrayImage {
        let (mut in_w, mut in_h) = image.dimensions();
        let mut result = image.clone();

        if in_w == 0 || in_h == 0 {
            return GrayImage::new(width, height);
        }

        if in_h > height || in_w > width {
            let aspect = f64::from(in_w) / f64::from(in_h);
            let mut new_w = in_w.min(width);
            let mut new_h = in_h.min(height);
            if f64::from(new_w) / aspect > f64::from(height) {
                new_w = (f64::from(height) * aspect) as u32;
            } else {
                new_h = (f64::from(width) / aspect) as u32;
            }
            result = imageops::resize(&result, new_w.max(1), new_h.max(1), FilterType::Nearest);
            (in_w, in_h) = result.dimensions();
        }

        if (in_w, in_h) == (width, height) {
            return result;
        }

        let mut padded = GrayImage::new(width, height);
        let left = (width - in_w) / 2;
        let top = (height - in_h) / 2;
        imageops::replace(&mut padded, &result, i64::from(left), i64::from(top));
        padded
    }

    /// Rotate by a multiple of 90 degrees
    pub fn rotate<Px>(image: &ImageBuffer<Px, Vec<u8>>, rotation: Rotation) -> ImageBuffer<Px, Vec<u8>>
    where
        Px: Pixel<Subpixel = u8> + 'static,
    {
        match rotation {
            Rotation::None => image.clone(),
            Rotation::Clockwise => imageops::rotate90(image),
            Rotation::CounterClockwise => imageops::rotate270(image),
            Rotation::HalfTurn => imageops::rotate180(image),
        }
    }
}
