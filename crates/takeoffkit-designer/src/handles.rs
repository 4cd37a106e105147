//! Resize handles of the selected object.
//!
//! Handle indices per shape:
//! - rectangle and text box: corners TL, TR, BR, BL (0..=3)
//! - ellipse: top, right, bottom, left (0..=3)
//! - line: start, end (0..=1)
//! - triangle: vertices in insertion order (0..=2)

use crate::derive::derive_value;
use crate::hit_test::HitTester;
use crate::model::{DesignerShape, DrawingObject, Point, Shape};
use crate::viewport::Viewport;

impl HitTester<'_> {
    /// Handle centers in view space.
    pub fn handle_positions(&self, obj: &DrawingObject) -> Vec<Point> {
        match &obj.shape {
            Shape::Text(text) => {
                let (x0, y0, x1, y1) = self.text_box(text);
                vec![
                    Point::new(x0, y0),
                    Point::new(x1, y0),
                    Point::new(x1, y1),
                    Point::new(x0, y1),
                ]
            }
            shape => shape
                .handle_points()
                .into_iter()
                .map(|p| self.viewport.point_to_view(p))
                .collect(),
        }
    }

    /// Index of the handle whose square contains `(x, y)`, if any.
    pub fn detect_handle(&self, obj: &DrawingObject, x: f64, y: f64) -> Option<usize> {
        let half = self.canvas.handle_half_size_px;
        self.handle_positions(obj)
            .iter()
            .position(|h| (x - h.x).abs() <= half && (y - h.y).abs() <= half)
    }
}

/// Moves handle `index` of `obj` to the view point `(x, y)` and re-derives its value.
///
/// Geometry is recomputed from the pointer position alone, so repeated calls
/// during a drag never accumulate error.
pub fn resize_by_handle(obj: &mut DrawingObject, index: usize, viewport: &Viewport, x: f64, y: f64) {
    let p = viewport.to_document(x, y);
    obj.shape.resize(index, p);
    derive_value(obj);
}
