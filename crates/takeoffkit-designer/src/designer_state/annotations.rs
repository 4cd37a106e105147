//! Formula annotations, manual values and roof slopes.

use takeoffkit_core::constants::{FORMULA_PLACES, TEXT_BOX_PX};
use takeoffkit_core::{format_fixed, round_stored, Category, ProjectError};
use uuid::Uuid;

use super::DesignerState;
use crate::aggregation::{page_header, slope_from_rise};
use crate::collaborators::UserPrompt;
use crate::derive::derive_value;
use crate::model::{DesignText, DrawingObject, Point, Shape};

/// Where an applied slope was stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlopeTarget {
    /// Override on the selected roof object.
    Shape(Uuid),
    /// Default for a page.
    Page(usize),
}

impl DesignerState {
    /// Places the formula line of object `id` next to it as generated text.
    ///
    /// Returns the id of the new text, or `None` when the object has no value.
    pub fn annotate_shape(&mut self, id: Uuid) -> Option<Uuid> {
        let page = self.store.page_of(id)?;
        let obj = self.store.get(id)?;
        if obj.is_summary() {
            return None;
        }

        let line = match self
            .aggregator()
            .contribution(obj, self.store.page_slope(page))
        {
            Some(c) => c.line,
            None => format_fixed(obj.value?, FORMULA_PLACES),
        };
        let at = annotation_anchor(&obj.shape);
        let annotation =
            DrawingObject::new(Shape::Text(DesignText::new_summary(at.x, at.y, line)))
                .colored(obj.color.clone());

        let new_id = annotation.id;
        self.store.push(page, annotation).ok()?;
        self.is_modified = true;
        tracing::debug!("Annotated {} on page {}", id, page + 1);
        Some(new_id)
    }

    /// Inserts the current page report as generated text at a document point.
    pub fn insert_page_summary(&mut self, at: Point) -> Uuid {
        let stats = self.page_stats();
        let text = std::iter::once(page_header(stats.page))
            .chain(stats.lines)
            .collect::<Vec<_>>()
            .join("\n");
        let obj = DrawingObject::new(Shape::Text(DesignText::new_summary(at.x, at.y, text)))
            .colored(self.config.tools.neutral.clone());
        self.add_shape(obj)
    }

    /// Sets a hand-entered value that geometry changes no longer overwrite.
    ///
    /// Text values always come from their content; for text this returns
    /// `Ok(false)` and changes nothing.
    pub fn set_manual_value(&mut self, id: Uuid, value: f64) -> Result<bool, ProjectError> {
        let obj = self
            .store
            .get_mut(id)
            .ok_or(ProjectError::ShapeNotFound { id })?;
        if obj.is_text() {
            return Ok(false);
        }
        obj.value = Some(round_stored(value));
        obj.manual_value = true;
        self.is_modified = true;
        Ok(true)
    }

    /// Drops a hand-entered value and derives it from geometry again.
    pub fn clear_manual_value(&mut self, id: Uuid) -> Result<(), ProjectError> {
        let obj = self
            .store
            .get_mut(id)
            .ok_or(ProjectError::ShapeNotFound { id })?;
        if obj.manual_value {
            obj.manual_value = false;
            derive_value(obj);
            self.is_modified = true;
        }
        Ok(())
    }

    /// Sets or clears the slope override of one object.
    pub fn set_shape_slope(&mut self, id: Uuid, slope: Option<f64>) -> Result<(), ProjectError> {
        if let Some(value) = slope {
            validate_slope(value)?;
        }
        let obj = self
            .store
            .get_mut(id)
            .ok_or(ProjectError::ShapeNotFound { id })?;
        obj.slope = slope;
        self.is_modified = true;
        Ok(())
    }

    /// Asks for a rise (height and base), turns it into a multiplier, keeps it
    /// as a preset and applies it.
    pub fn prompt_slope(&mut self, prompt: &mut dyn UserPrompt) -> Option<f64> {
        let answers = prompt.ask_numbers("Roof slope", &["height", "base"])?;
        let height = *answers.get("height")?;
        let base = *answers.get("base")?;

        let Some(slope) = slope_from_rise(height, base) else {
            tracing::warn!("Rejected slope input: height {}, base {}", height, base);
            return None;
        };
        self.presets.add(slope);
        match self.apply_slope(slope) {
            Ok(_) => Some(slope),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        }
    }

    /// Applies a multiplier to the selected roof object, or else makes it the
    /// current page's default.
    pub fn apply_slope(&mut self, slope: f64) -> Result<SlopeTarget, ProjectError> {
        validate_slope(slope)?;

        let roof = self
            .selected_object()
            .filter(|obj| self.aggregator().category_of(&obj.color) == Some(Category::Roof))
            .map(|obj| obj.id);

        let target = match roof {
            Some(id) => {
                self.set_shape_slope(id, Some(slope))?;
                SlopeTarget::Shape(id)
            }
            None => {
                self.store.set_page_slope(self.page_index, slope)?;
                self.is_modified = true;
                SlopeTarget::Page(self.page_index)
            }
        };
        tracing::debug!("Slope {} applied to {:?}", slope, target);
        Ok(target)
    }
}

fn validate_slope(value: f64) -> Result<(), ProjectError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ProjectError::InvalidSlope { value })
    }
}

/// Document point where an object's annotation goes.
fn annotation_anchor(shape: &Shape) -> Point {
    match shape {
        Shape::Triangle(tri) => {
            let c = tri.centroid();
            Point::new(c.x, c.y - 20.0)
        }
        Shape::Line(line) => {
            let m = line.midpoint();
            Point::new(m.x, m.y - 10.0)
        }
        Shape::Rectangle(r) => Point::new(r.x + r.w, r.y - 15.0),
        Shape::Ellipse(e) => Point::new(e.x + e.w, e.y - 15.0),
        Shape::Text(t) => Point::new(t.x + TEXT_BOX_PX.0, t.y - 15.0),
    }
}
