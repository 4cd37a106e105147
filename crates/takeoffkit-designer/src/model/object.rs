//! Drawing object: a shape plus the attributes every annotation carries.

use uuid::Uuid;

use takeoffkit_core::constants::DEFAULT_COLOR;

use super::Shape;

/// An annotation on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingObject {
    /// Stable for the lifetime of the object.
    pub id: Uuid,
    pub shape: Shape,
    /// Category key for aggregation.
    pub color: String,
    /// Derived area, length or formula result.
    pub value: Option<f64>,
    /// Roof slope override.
    pub slope: Option<f64>,
    /// Set when `value` was typed in by hand; derivation leaves it alone.
    pub manual_value: bool,
}

impl DrawingObject {
    /// Creates an object with a fresh id and the neutral color.
    pub fn new(shape: Shape) -> Self {
        Self::with_id(Uuid::new_v4(), shape)
    }

    pub fn with_id(id: Uuid, shape: Shape) -> Self {
        Self {
            id,
            shape,
            color: DEFAULT_COLOR.to_string(),
            value: None,
            slope: None,
            manual_value: false,
        }
    }

    pub fn colored(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn is_text(&self) -> bool {
        matches!(self.shape, Shape::Text(_))
    }

    /// True for generated report text.
    pub fn is_summary(&self) -> bool {
        self.shape.as_text().is_some_and(|t| t.summary)
    }
}
