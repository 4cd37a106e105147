use serde::{Deserialize, Serialize};

use super::{DesignerShape, Point};

/// Axis-aligned rectangle anchored at its top-left corner.
///
/// `w` and `h` can go negative while a corner is dragged past the opposite
/// one; measurement and hit-testing use the magnitudes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRectangle {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl DesignRectangle {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Builds a rectangle from two opposite corners in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let (left, right) = (a.x.min(b.x), a.x.max(b.x));
        let (top, bottom) = (a.y.min(b.y), a.y.max(b.y));
        Self::new(left, top, right - left, bottom - top)
    }

    /// Corners in handle order: top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.x + self.w, self.y),
            Point::new(self.x + self.w, self.y + self.h),
            Point::new(self.x, self.y + self.h),
        ]
    }
}

impl DesignerShape for DesignRectangle {
    fn bounds(&self) -> (f64, f64, f64, f64) {
        let x2 = self.x + self.w;
        let y2 = self.y + self.h;
        (self.x.min(x2), self.y.min(y2), self.x.max(x2), self.y.max(y2))
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    fn handle_points(&self) -> Vec<Point> {
        self.corners().to_vec()
    }

    fn resize(&mut self, handle: usize, p: Point) {
        let right = self.x + self.w;
        let bottom = self.y + self.h;
        match handle {
            0 => {
                self.w = right - p.x;
                self.h = bottom - p.y;
                self.x = p.x;
                self.y = p.y;
            }
            1 => {
                self.w = p.x - self.x;
                self.h = bottom - p.y;
                self.y = p.y;
            }
            2 => {
                self.w = p.x - self.x;
                self.h = p.y - self.y;
            }
            3 => {
                self.w = right - p.x;
                self.h = p.y - self.y;
                self.x = p.x;
            }
            _ => {}
        }
    }

    fn measure(&self) -> Option<f64> {
        Some(self.w.abs() * self.h.abs())
    }
}
