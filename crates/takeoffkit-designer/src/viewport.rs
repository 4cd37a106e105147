//! Viewport and coordinate transformation for the annotation canvas.
//!
//! Converts between view coordinates (canvas pixels) and document coordinates
//! (page space). Both axes point the same way, so the mapping is a uniform
//! scale followed by a pixel offset:
//!
//! ```text
//! doc_x  = (view_x - offset_x) / scale
//! view_x = doc_x * scale + offset_x
//! ```

use takeoffkit_core::constants::ZOOM_STEP;

use crate::model::Point;

/// Zoom and pan state of the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    scale: f64,
    offset_x: f64,
    offset_y: f64,
    zoom_step: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Creates an identity viewport (scale 1, no offset).
    pub fn new() -> Self {
        Self::with_zoom_step(ZOOM_STEP)
    }

    /// Creates an identity viewport with a custom zoom multiplier.
    pub fn with_zoom_step(zoom_step: f64) -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            zoom_step,
        }
    }

    /// Current zoom factor (1.0 = 100%).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the zoom factor. Non-positive or non-finite values are ignored.
    pub fn set_scale(&mut self, scale: f64) {
        if scale.is_finite() && scale > 0.0 {
            self.scale = scale;
        }
    }

    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    pub fn zoom_step(&self) -> f64 {
        self.zoom_step
    }

    /// Sets the pixel offset.
    pub fn set_offset(&mut self, x: f64, y: f64) {
        self.offset_x = x;
        self.offset_y = y;
    }

    /// Pans by a delta in view pixels.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Multiplies the scale by the zoom step. Unbounded.
    pub fn zoom_in(&mut self) {
        self.scale *= self.zoom_step;
    }

    /// Divides the scale by the zoom step. Unbounded.
    pub fn zoom_out(&mut self) {
        self.scale /= self.zoom_step;
    }

    /// Back to scale 1 and zero offset.
    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }

    /// Converts view coordinates to document coordinates.
    pub fn to_document(&self, view_x: f64, view_y: f64) -> Point {
        Point::new(
            (view_x - self.offset_x) / self.scale,
            (view_y - self.offset_y) / self.scale,
        )
    }

    /// Converts document coordinates to view coordinates.
    pub fn to_view(&self, doc_x: f64, doc_y: f64) -> Point {
        Point::new(
            doc_x * self.scale + self.offset_x,
            doc_y * self.scale + self.offset_y,
        )
    }

    /// Converts a document-space point to view space.
    pub fn point_to_view(&self, p: Point) -> Point {
        self.to_view(p.x, p.y)
    }

    /// Converts a view-space length to document units.
    pub fn length_to_document(&self, len: f64) -> f64 {
        len / self.scale
    }
}
