//! Axis-aligned boxes in pixel coordinates
//!
//! Screen layouts, detector regions and contour extents all use the same
//! `(x, y, width, height)` box.

use imageproc::point::Point;
use imageproc::rect::Rect;
use serde::{Deserialize, Serialize};

/// Axis-aligned box, `(x, y)` being the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BBox {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl BBox {
    /// Create a new bounding box
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest box holding both inclusive corners
    pub fn from_corners(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (x0, x1) = (x0.min(x1), x0.max(x1));
        let (y0, y1) = (y0.min(y1), y0.max(y1));
        Self::new(x0, y0, (x1 - x0 + 1) as u32, (y1 - y0 + 1) as u32)
    }

    /// Smallest box holding every point, `None` for an empty slice
    pub fn enclosing(points: &[Point<i32>]) -> Option<Self> {
        let first = points.first()?;
        let (mut x0, mut y0, mut x1, mut y1) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            x0 = x0.min(p.x);
            y0 = y0.min(p.y);
            x1 = x1.max(p.x);
            y1 = y1.max(p.y);
        }
        Some(Self::from_corners(x0, y0, x1, y1))
    }

    /// Exclusive right edge
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Calculate area of the bounding box
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Calculate center point
    pub fn center(&self) -> (f64, f64) {
        (
            f64::from(self.x) + f64::from(self.width) / 2.0,
            f64::from(self.y) + f64::from(self.height) / 2.0,
        )
    }

    /// Union of two boxes
    pub fn union(&self, other: &BBox) -> Self {
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        Self::new(x0, y0, (x1 - x0) as u32, (y1 - y0) as u32)
    }

    /// Intersection with an image of the given size, `None` if disjoint
    pub fn clamp_to(&self, width: u32, height: u32) -> Option<Self> {
        let x0 = self.x.max(0);
        let y0 = self.y.max(0);
        let x1 = self.right().min(width as i32);
        let y1 = self.bottom().min(height as i32);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Self::new(x0, y0, (x1 - x0) as u32, (y1 - y0) as u32))
    }

    /// Convert to imageproc Rect for drawing
    pub fn to_rect(&self) -> Rect {
        Rect::at(self.x, self.y).of_size(self.width.max(1), self.height.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enclosing_points() {
        let points = [Point::new(4, 9), Point::new(2, 3), Point::new(7, 5)];
        assert_eq!(BBox::enclosing(&points), Some(BBox::new(2, 3, 6, 7)));
        assert_eq!(BBox::enclosing(&[]), None);
    }

    #[test]
    fn test_union_and_clamp() {
        let a = BBox::new(0, 0, 10, 10);
        let b = BBox::new(20, 5, 5, 10);
        assert_eq!(a.union(&b), BBox::new(0, 0, 25, 15));

        let c = BBox::new(-5, 90, 20, 20);
        assert_eq!(c.clamp_to(100, 100), Some(BBox::new(0, 90, 15, 10)));
        assert_eq!(c.clamp_to(100, 50), None);
    }

    #[test]
    fn test_center() {
        assert_eq!(BBox::new(10, 20, 16, 8).center(), (18.0, 24.0));
    }
}
