use serde::{Deserialize, Serialize};

use takeoffkit_core::constants::TEXT_BOX_PX;

use super::{DesignerShape, Point};

/// Text anchored at its top-left corner.
///
/// The content is either a free memo or an arithmetic expression; see
/// [`crate::derive`] for how the two are told apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignText {
    pub x: f64,
    pub y: f64,
    pub text: String,
    /// Generated report text. Never evaluated and never aggregated.
    #[serde(default)]
    pub summary: bool,
}

impl DesignText {
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            summary: false,
        }
    }

    pub fn new_summary(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            summary: true,
            ..Self::new(x, y, text)
        }
    }

    pub fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl DesignerShape for DesignText {
    fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.x + TEXT_BOX_PX.0, self.y + TEXT_BOX_PX.1)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Corners of the nominal text box. The canvas replaces these with the
    /// measured box when a text metrics provider is available.
    fn handle_points(&self) -> Vec<Point> {
        let (x0, y0, x1, y1) = self.bounds();
        vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ]
    }

    // Text has no geometry to stretch.
    fn resize(&mut self, _handle: usize, _p: Point) {}

    fn measure(&self) -> Option<f64> {
        None
    }
}
