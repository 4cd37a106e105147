//! Pointer, wheel and double-click event handling.

use super::{DesignerState, DragState, Mode, Tool};
use crate::collaborators::UserPrompt;
use crate::derive::derive_value;
use crate::handles::resize_by_handle;
use crate::model::{
    DesignEllipse, DesignLine, DesignRectangle, DesignText, DesignTriangle, DesignerShape,
    DrawingObject, Point, Shape,
};

/// Construction guide drawn by the GUI, in view space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Preview {
    /// Outline of the rectangle that the next click would create.
    Rect { from: Point, to: Point },
    Segment { from: Point, to: Point },
}

impl DesignerState {
    /// Handles a pointer press at a view point.
    pub fn on_press(&mut self, x: f64, y: f64, prompt: &mut dyn UserPrompt) {
        if !self.has_document() {
            return;
        }
        let p = Point::new(x, y);
        self.cursor = Some(p);

        match (self.mode, self.tool) {
            (Mode::Draw, Some(tool)) => self.press_draw(tool, p, prompt),
            (Mode::Draw, None) => {}
            (Mode::Move, _) => self.press_move(p),
        }
    }

    fn press_move(&mut self, p: Point) {
        let handle_hit = self.selected_object().and_then(|obj| {
            self.hit_tester()
                .detect_handle(obj, p.x, p.y)
                .map(|handle| (obj.id, handle))
        });
        if let Some((id, handle)) = handle_hit {
            tracing::debug!("Resize start on {} handle {}", id, handle);
            self.drag = DragState::Resize { id, handle };
            return;
        }

        match self.find_shape(p.x, p.y) {
            Some((id, _region)) => {
                self.selected = Some(id);
                self.drag = DragState::Move { id, last: p };
            }
            None => {
                self.selected = None;
                self.drag = DragState::Pan { last: p };
            }
        }
    }

    fn press_draw(&mut self, tool: Tool, p: Point, prompt: &mut dyn UserPrompt) {
        match tool {
            Tool::Rect => match self.pending_rect.take() {
                None => self.pending_rect = Some(p),
                Some(first) => {
                    let a = self.viewport.to_document(first.x, first.y);
                    let b = self.viewport.to_document(p.x, p.y);
                    self.commit(tool, Shape::Rectangle(DesignRectangle::from_corners(a, b)));
                }
            },
            Tool::Ellipse => {
                let r = self.config.canvas.ellipse_click_radius_px;
                let origin = self.viewport.to_document(p.x - r, p.y - r);
                let size = self.viewport.length_to_document(2.0 * r);
                self.commit(
                    tool,
                    Shape::Ellipse(DesignEllipse::new(origin.x, origin.y, size, size)),
                );
            }
            Tool::Line => {
                self.drag = DragState::Line {
                    start: p,
                    current: p,
                };
            }
            Tool::Triangle => {
                self.triangle_points.push(p);
                if self.triangle_points.len() == 3 {
                    let pts: Vec<Point> = self
                        .triangle_points
                        .drain(..)
                        .map(|v| self.viewport.to_document(v.x, v.y))
                        .collect();
                    if let Some(tri) = DesignTriangle::from_slice(&pts) {
                        self.commit(tool, Shape::Triangle(tri));
                    }
                }
            }
            Tool::Text => {
                let Some(text) = prompt.ask_text("Text", None) else {
                    return;
                };
                if text.trim().is_empty() {
                    return;
                }
                let at = self.viewport.to_document(p.x, p.y);
                self.commit(tool, Shape::Text(DesignText::new(at.x, at.y, text)));
            }
        }
    }

    fn commit(&mut self, tool: Tool, shape: Shape) {
        let color = self.tool_color(tool);
        self.add_shape(DrawingObject::new(shape).colored(color));
    }

    /// Handles pointer motion with a button held.
    pub fn on_drag(&mut self, x: f64, y: f64) {
        let p = Point::new(x, y);
        self.cursor = Some(p);

        match self.drag {
            DragState::Idle => {}
            DragState::Resize { id, handle } => {
                if let Some(obj) = self.store.get_mut(id) {
                    resize_by_handle(obj, handle, &self.viewport, x, y);
                    self.is_modified = true;
                }
            }
            DragState::Move { id, last } => {
                let scale = self.viewport.scale();
                if let Some(obj) = self.store.get_mut(id) {
                    obj.shape.translate((x - last.x) / scale, (y - last.y) / scale);
                    derive_value(obj);
                    self.is_modified = true;
                }
                self.drag = DragState::Move { id, last: p };
            }
            DragState::Pan { last } => {
                self.viewport.pan_by(x - last.x, y - last.y);
                self.drag = DragState::Pan { last: p };
            }
            DragState::Line { start, .. } => {
                self.drag = DragState::Line { start, current: p };
            }
        }
    }

    /// Handles a pointer release and finishes the current drag.
    pub fn on_release(&mut self, x: f64, y: f64) {
        self.cursor = Some(Point::new(x, y));

        match std::mem::take(&mut self.drag) {
            DragState::Line { start, .. } => {
                let a = self.viewport.to_document(start.x, start.y);
                let b = self.viewport.to_document(x, y);
                self.commit(Tool::Line, Shape::Line(DesignLine::new(a, b)));
            }
            DragState::Resize { id, .. } | DragState::Move { id, .. } => {
                if let Some(obj) = self.store.get(id) {
                    tracing::debug!("Value of {} is now {:?}", id, obj.value);
                }
            }
            DragState::Pan { .. } | DragState::Idle => {}
        }
    }

    /// Tracks the cursor for construction previews.
    pub fn on_motion(&mut self, x: f64, y: f64) {
        self.cursor = Some(Point::new(x, y));
    }

    /// Edits the text under the pointer. Returns true when the text changed.
    pub fn on_double_click(&mut self, x: f64, y: f64, prompt: &mut dyn UserPrompt) -> bool {
        let Some((id, _)) = self.find_shape(x, y) else {
            return false;
        };
        let current = match self.store.get(id).and_then(|obj| obj.shape.as_text()) {
            Some(text) => text.text.clone(),
            None => return false,
        };

        let Some(edited) = prompt.ask_text("Edit text", Some(&current)) else {
            return false;
        };
        if edited.trim().is_empty() {
            return false;
        }

        let Some(obj) = self.store.get_mut(id) else {
            return false;
        };
        if let Some(text) = obj.shape.as_text_mut() {
            text.text = edited;
        }
        derive_value(obj);
        self.is_modified = true;
        true
    }

    /// Zooms in for a positive wheel delta, out otherwise.
    pub fn on_wheel(&mut self, delta: f64) {
        if delta > 0.0 {
            self.viewport.zoom_in();
        } else {
            self.viewport.zoom_out();
        }
    }

    /// Guides for the shape under construction.
    pub fn previews(&self) -> Vec<Preview> {
        let mut out = Vec::new();
        if let DragState::Line { start, current } = self.drag {
            out.push(Preview::Segment {
                from: start,
                to: current,
            });
        }
        if self.mode != Mode::Draw {
            return out;
        }

        match self.tool {
            Some(Tool::Rect) => {
                if let (Some(from), Some(to)) = (self.pending_rect, self.cursor) {
                    out.push(Preview::Rect { from, to });
                }
            }
            Some(Tool::Triangle) => {
                let pts = &self.triangle_points;
                out.extend(pts.windows(2).map(|w| Preview::Segment {
                    from: w[0],
                    to: w[1],
                }));
                if let (Some(last), Some(cursor)) = (pts.last(), self.cursor) {
                    out.push(Preview::Segment {
                        from: *last,
                        to: cursor,
                    });
                    if pts.len() >= 2 {
                        out.push(Preview::Segment {
                            from: pts[0],
                            to: cursor,
                        });
                    }
                }
            }
            _ => {}
        }
        out
    }
}
