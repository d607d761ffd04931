//! Region boundaries traced out of binary masks
//!
//! Areas and centroids come from the polygon moments of the traced
//! boundary, so a filled `w x h` rectangle has area `(w - 1) * (h - 1)`.

use crate::bbox::BBox;
use crate::utils::image::ImageUtils;
use crate::utils::mask::{FOREGROUND, MaskOps};
use image::GrayImage;
use imageproc::contours::{self, BorderType};
use imageproc::drawing::draw_polygon_mut;
use imageproc::geometry::convex_hull;
use imageproc::point::Point;

/// Closed boundary of one connected foreground region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contour {
    pub points: Vec<Point<i32>>,
}

/// Zeroth and first order polygon moments
#[derive(Debug, Clone, Copy, PartialEq)]
struct Moments {
    m00: f64,
    m10: f64,
    m01: f64,
}

fn moments(points: &[Point<i32>]) -> Moments {
    let mut m = Moments {
        m00: 0.0,
        m10: 0.0,
        m01: 0.0,
    };
    let n = points.len();
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        let (x0, y0, x1, y1) = (f64::from(p.x), f64::from(p.y), f64::from(q.x), f64::from(q.y));
        let cross = x0 * y1 - x1 * y0;
        m.m00 += cross;
        m.m10 += (x0 + x1) * cross;
        m.m01 += (y0 + y1) * cross;
    }
    m.m00 /= 2.0;
    m.m10 /= 6.0;
    m.m01 /= 6.0;
    m
}

impl Contour {
    pub fn new(points: Vec<Point<i32>>) -> Self {
        Self { points }
    }

    /// Outermost boundaries only; holes and anything nested inside them
    /// are skipped.
    pub fn external(mask: &GrayImage) -> Vec<Contour> {
        contours::find_contours::<i32>(mask)
            .into_iter()
            .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
            .map(|c| Contour::new(c.points))
            .collect()
    }

    /// Every outer boundary, nested or not, paired with its number of
    /// direct holes.
    pub fn with_holes(mask: &GrayImage) -> Vec<(Contour, usize)> {
        let all = contours::find_contours::<i32>(mask);
        all.iter()
            .enumerate()
            .filter(|(_, c)| c.border_type == BorderType::Outer)
            .map(|(i, c)| {
                let holes = all
                    .iter()
                    .filter(|h| h.border_type == BorderType::Hole && h.parent == Some(i))
                    .count();
                (Contour::new(c.points.clone()), holes)
            })
            .collect()
    }

    /// Enclosed polygon area
    pub fn area(&self) -> f64 {
        moments(&self.points).m00.abs()
    }

    /// Moment centroid, `None` for degenerate contours
    pub fn centroid(&self) -> Option<(f64, f64)> {
        let m = moments(&self.points);
        if m.m00 == 0.0 {
            return None;
        }
        Some((m.m10 / m.m00, m.m01 / m.m00))
    }

    /// Centroid truncated to whole pixels
    pub fn centroid_px(&self) -> Option<(i32, i32)> {
        self.centroid().map(|(x, y)| (x as i32, y as i32))
    }

    /// Bounding box, zero-sized at the origin for an empty contour
    pub fn bbox(&self) -> BBox {
        BBox::enclosing(&self.points).unwrap_or(BBox::new(0, 0, 0, 0))
    }

    pub fn min_x(&self) -> i32 {
        self.bbox().x
    }

    pub fn min_y(&self) -> i32 {
        self.bbox().y
    }

    /// First point with the largest y coordinate
    pub fn lowest_point(&self) -> Option<Point<i32>> {
        self.points
            .iter()
            .copied()
            .reduce(|low, p| if p.y > low.y { p } else { low })
    }

    pub fn hull_area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let hull = convex_hull(&self.points[..]);
        Contour::new(hull).area()
    }

    /// Rasterize the filled contour, shifted by `offset`, onto a blank mask
    pub fn fill(&self, width: u32, height: u32, offset: (i32, i32)) -> GrayImage {
        let mut mask = GrayImage::new(width, height);
        let mut poly: Vec<Point<i32>> = self
            .points
            .iter()
            .map(|p| Point::new(p.x + offset.0, p.y + offset.1))
            .collect();
        while poly.len() > 1 && poly.first() == poly.last() {
            poly.pop();
        }

        if poly.len() < 3 {
            for p in poly {
                if p.x >= 0 && p.y >= 0 && (p.x as u32) < width && (p.y as u32) < height {
                    mask.put_pixel(p.x as u32, p.y as u32, FOREGROUND);
                }
            }
        } else {
            draw_polygon_mut(&mut mask, &poly, FOREGROUND);
        }
        mask
    }

    /// Crop `image` to the contour's box and zero everything outside it
    pub fn crop_masked(&self, image: &GrayImage) -> GrayImage {
        let bbox = self.bbox();
        let crop = ImageUtils::crop(image, bbox);
        let inside = self.fill(crop.width(), crop.height(), (-bbox.x.max(0), -bbox.y.max(0)));
        MaskOps::apply(&crop, &inside)
    }

    /// Keep contours with at least `min_area`, preserving order
    pub fn filter_by_area(contours: Vec<Contour>, min_area: f64) -> Vec<Contour> {
        contours.into_iter().filter(|c| c.area() >= min_area).collect()
    }

    /// The `n` largest contours, largest first; ties keep their order
    pub fn largest(mut contours: Vec<Contour>, n: usize) -> Vec<Contour> {
        contours.sort_by(|a, b| b.area().total_cmp(&a.area()));
        contours.truncate(n);
        contours
    }

    /// Stable sort by the left edge
    pub fn sort_by_x(contours: &mut [Contour]) {
        contours.sort_by_key(Contour::min_x);
    }

    /// Stable sort by the top edge
    pub fn sort_by_y(contours: &mut [Contour]) {
        contours.sort_by_key(Contour::min_y);
    }
}
