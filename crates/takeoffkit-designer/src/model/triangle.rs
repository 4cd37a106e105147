use serde::{Deserialize, Serialize};

use super::{DesignerShape, Point};
use crate::geometry;

/// Triangle given by three vertices in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignTriangle {
    pub points: [Point; 3],
}

impl DesignTriangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { points: [a, b, c] }
    }

    /// Builds a triangle from a point list; `None` unless it has exactly three points.
    pub fn from_slice(points: &[Point]) -> Option<Self> {
        match points {
            [a, b, c] => Some(Self::new(*a, *b, *c)),
            _ => None,
        }
    }

    pub fn centroid(&self) -> Point {
        let [a, b, c] = self.points;
        Point::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
    }
}

impl DesignerShape for DesignTriangle {
    fn bounds(&self) -> (f64, f64, f64, f64) {
        self.points.iter().fold(
            (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
            |(x0, y0, x1, y1), p| (x0.min(p.x), y0.min(p.y), x1.max(p.x), y1.max(p.y)),
        )
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.points {
            p.x += dx;
            p.y += dy;
        }
    }

    fn handle_points(&self) -> Vec<Point> {
        self.points.to_vec()
    }

    fn resize(&mut self, handle: usize, p: Point) {
        if let Some(vertex) = self.points.get_mut(handle) {
            *vertex = p;
        }
    }

    fn measure(&self) -> Option<f64> {
        Some(geometry::polygon_area(&self.points))
    }
}
