use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use takeoffkit_core::ProjectError;

mod ellipse;
mod line;
mod object;
mod rectangle;
mod text;
mod triangle;

pub use ellipse::DesignEllipse;
pub use line::DesignLine;
pub use object::DrawingObject;
pub use rectangle::DesignRectangle;
pub use text::DesignText;
pub use triangle::DesignTriangle;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Geometry operations every shape variant supports.
///
/// All coordinates are in document space.
pub trait DesignerShape {
    /// Axis-aligned bounds as `(min_x, min_y, max_x, max_y)`.
    fn bounds(&self) -> (f64, f64, f64, f64);

    fn translate(&mut self, dx: f64, dy: f64);

    /// Resize handle positions in index order.
    fn handle_points(&self) -> Vec<Point>;

    /// Drags handle `handle` to `p`. Unknown indices are ignored.
    fn resize(&mut self, handle: usize, p: Point);

    /// Area or length of the shape. `None` when the shape has no geometric measure.
    fn measure(&self) -> Option<f64>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Rect,
    Ellipse,
    Line,
    Triangle,
    Text,
}

impl ShapeType {
    /// Tag used in project files.
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeType::Rect => "rect",
            ShapeType::Ellipse => "ellipse",
            ShapeType::Line => "line",
            ShapeType::Triangle => "triangle",
            ShapeType::Text => "text",
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeType {
    type Err = ProjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rect" | "rectangle" => Ok(ShapeType::Rect),
            "ellipse" => Ok(ShapeType::Ellipse),
            "line" => Ok(ShapeType::Line),
            "triangle" => Ok(ShapeType::Triangle),
            "text" => Ok(ShapeType::Text),
            other => Err(ProjectError::UnknownShapeType {
                shape_type: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(DesignRectangle),
    Ellipse(DesignEllipse),
    Line(DesignLine),
    Triangle(DesignTriangle),
    Text(DesignText),
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Rectangle(_) => ShapeType::Rect,
            Shape::Ellipse(_) => ShapeType::Ellipse,
            Shape::Line(_) => ShapeType::Line,
            Shape::Triangle(_) => ShapeType::Triangle,
            Shape::Text(_) => ShapeType::Text,
        }
    }

    pub fn as_text(&self) -> Option<&DesignText> {
        match self {
            Shape::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut DesignText> {
        match self {
            Shape::Text(t) => Some(t),
            _ => None,
        }
    }
}

impl DesignerShape for Shape {
    fn bounds(&self) -> (f64, f64, f64, f64) {
        match self {
            Shape::Rectangle(s) => s.bounds(),
            Shape::Ellipse(s) => s.bounds(),
            Shape::Line(s) => s.bounds(),
            Shape::Triangle(s) => s.bounds(),
            Shape::Text(s) => s.bounds(),
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Shape::Rectangle(s) => s.translate(dx, dy),
            Shape::Ellipse(s) => s.translate(dx, dy),
            Shape::Line(s) => s.translate(dx, dy),
            Shape::Triangle(s) => s.translate(dx, dy),
            Shape::Text(s) => s.translate(dx, dy),
        }
    }

    fn handle_points(&self) -> Vec<Point> {
        match self {
            Shape::Rectangle(s) => s.handle_points(),
            Shape::Ellipse(s) => s.handle_points(),
            Shape::Line(s) => s.handle_points(),
            Shape::Triangle(s) => s.handle_points(),
            Shape::Text(s) => s.handle_points(),
        }
    }

    fn resize(&mut self, handle: usize, p: Point) {
        match self {
            Shape::Rectangle(s) => s.resize(handle, p),
            Shape::Ellipse(s) => s.resize(handle, p),
            Shape::Line(s) => s.resize(handle, p),
            Shape::Triangle(s) => s.resize(handle, p),
            Shape::Text(s) => s.resize(handle, p),
        }
    }

    fn measure(&self) -> Option<f64> {
        match self {
            Shape::Rectangle(s) => s.measure(),
            Shape::Ellipse(s) => s.measure(),
            Shape::Line(s) => s.measure(),
            Shape::Triangle(s) => s.measure(),
            Shape::Text(s) => s.measure(),
        }
    }
}
