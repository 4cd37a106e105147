use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::{DesignerShape, Point};

/// Ellipse inscribed in the box `(x, y, w, h)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignEllipse {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl DesignEllipse {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn circle(center: Point, radius: f64) -> Self {
        Self::new(
            center.x - radius,
            center.y - radius,
            radius * 2.0,
            radius * 2.0,
        )
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn radii(&self) -> (f64, f64) {
        (self.w.abs() / 2.0, self.h.abs() / 2.0)
    }
}

impl DesignerShape for DesignEllipse {
    fn bounds(&self) -> (f64, f64, f64, f64) {
        let x2 = self.x + self.w;
        let y2 = self.y + self.h;
        (self.x.min(x2), self.y.min(y2), self.x.max(x2), self.y.max(y2))
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Top, right, bottom, left.
    fn handle_points(&self) -> Vec<Point> {
        let c = self.center();
        vec![
            Point::new(c.x, self.y),
            Point::new(self.x + self.w, c.y),
            Point::new(c.x, self.y + self.h),
            Point::new(self.x, c.y),
        ]
    }

    // Each handle moves a single axis; the opposite side stays put.
    fn resize(&mut self, handle: usize, p: Point) {
        match handle {
            0 => {
                self.h = (self.y + self.h) - p.y;
                self.y = p.y;
            }
            1 => self.w = p.x - self.x,
            2 => self.h = p.y - self.y,
            3 => {
                self.w = (self.x + self.w) - p.x;
                self.x = p.x;
            }
            _ => {}
        }
    }

    fn measure(&self) -> Option<f64> {
        let (rx, ry) = self.radii();
        Some(PI * rx * ry)
    }
}
