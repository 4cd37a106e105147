//! Designer state manager for UI integration.
//! Holds the interaction context and handles UI callbacks.
//!
//! This module is split into submodules:
//! - `input`: Pointer, wheel and double-click events, drawing previews
//! - `pages`: Document opening, page navigation and deletion
//! - `annotations`: Formula annotations, manual values and roof slopes
//! - `file_io`: Project save/load and export

mod annotations;
mod file_io;
mod input;
mod pages;

pub use annotations::SlopeTarget;
pub use input::Preview;
pub use pages::DeleteOutcome;

use std::path::PathBuf;

use takeoffkit_settings::Config;
use uuid::Uuid;

use crate::aggregation::{Aggregator, DocumentStats, PageStats, SlopePresets};
use crate::collaborators::{NominalTextMetrics, PageSource, RasterImage, TextMetrics};
use crate::derive::derive_value;
use crate::hit_test::{HitRegion, HitTester};
use crate::model::{DrawingObject, Point};
use crate::page_store::PageStore;
use crate::viewport::Viewport;

/// Whether pointer presses edit existing objects or draw new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Move,
    Draw,
}

/// Drawing tool active in [`Mode::Draw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Rect,
    Ellipse,
    Line,
    Triangle,
    Text,
}

/// What the current pointer drag is doing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Translating an object; `last` is the previous pointer position.
    Move { id: Uuid, last: Point },
    /// Dragging a resize handle.
    Resize { id: Uuid, handle: usize },
    /// Panning the page.
    Pan { last: Point },
    /// Rubber-banding a new line.
    Line { start: Point, current: Point },
}

/// Designer state for UI integration
pub struct DesignerState {
    pub config: Config,
    pub viewport: Viewport,
    pub store: PageStore,
    pub presets: SlopePresets,
    pub pdf_path: Option<PathBuf>,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
    pub design_name: String,
    mode: Mode,
    tool: Option<Tool>,
    selected: Option<Uuid>,
    page_index: usize,
    drag: DragState,
    // Construction points are kept in view space until the shape is committed
    pending_rect: Option<Point>,
    triangle_points: Vec<Point>,
    cursor: Option<Point>,
    document: Option<Box<dyn PageSource>>,
    metrics: Box<dyn TextMetrics>,
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignerState {
    /// Creates a new designer state with default settings.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            viewport: Viewport::with_zoom_step(config.canvas.zoom_step),
            presets: SlopePresets::new(&config.slope.presets),
            config,
            store: PageStore::new(),
            pdf_path: None,
            current_file_path: None,
            is_modified: false,
            design_name: "Untitled".to_string(),
            mode: Mode::Move,
            tool: None,
            selected: None,
            page_index: 0,
            drag: DragState::Idle,
            pending_rect: None,
            triangle_points: Vec::new(),
            cursor: None,
            document: None,
            metrics: Box::new(NominalTextMetrics),
        }
    }

    /// Replaces the text metrics provider used for text hit boxes.
    pub fn set_text_metrics(&mut self, metrics: Box<dyn TextMetrics>) {
        self.metrics = metrics;
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn tool(&self) -> Option<Tool> {
        self.tool
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Switches mode; pressing the active mode again returns to Move.
    pub fn toggle_mode(&mut self, mode: Mode) {
        self.mode = if self.mode == mode { Mode::Move } else { mode };
        if self.mode == Mode::Move {
            self.tool = None;
        }
        self.reset_construction();
    }

    /// Selects a drawing tool and enters Draw mode. Selecting the active
    /// tool again turns it off and returns to Move mode.
    pub fn toggle_tool(&mut self, tool: Tool) {
        if self.tool == Some(tool) {
            self.tool = None;
            self.mode = Mode::Move;
        } else {
            self.tool = Some(tool);
            self.mode = Mode::Draw;
        }
        self.reset_construction();
    }

    pub(crate) fn reset_construction(&mut self) {
        self.pending_rect = None;
        self.triangle_points.clear();
        if matches!(self.drag, DragState::Line { .. }) {
            self.drag = DragState::Idle;
        }
    }

    pub fn selected_id(&self) -> Option<Uuid> {
        self.selected
    }

    pub fn selected_object(&self) -> Option<&DrawingObject> {
        self.selected.and_then(|id| self.store.get(id))
    }

    /// Selects an object on the current page, or clears the selection.
    pub fn select(&mut self, id: Option<Uuid>) {
        self.selected = id.filter(|id| self.store.page_of(*id) == Some(self.page_index));
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }

    pub fn page_count(&self) -> usize {
        self.document.as_ref().map_or(0, |doc| doc.page_count())
    }

    /// Objects on the current page in draw order.
    pub fn current_shapes(&self) -> &[DrawingObject] {
        self.store.shapes(self.page_index)
    }

    pub fn hit_tester(&self) -> HitTester<'_> {
        HitTester::new(&self.viewport, &self.config.canvas, self.metrics.as_ref())
    }

    /// Topmost object on the current page under a view point.
    pub fn find_shape(&self, x: f64, y: f64) -> Option<(Uuid, HitRegion)> {
        self.hit_tester()
            .find_shape(self.current_shapes(), x, y)
            .map(|(obj, region)| (obj.id, region))
    }

    /// View-space handle positions of the selected object.
    pub fn selected_handles(&self) -> Vec<Point> {
        self.selected_object()
            .map(|obj| self.hit_tester().handle_positions(obj))
            .unwrap_or_default()
    }

    /// Default color for objects drawn with `tool`.
    pub fn tool_color(&self, tool: Tool) -> String {
        let colors = &self.config.tools;
        match tool {
            Tool::Rect => colors.rect.clone(),
            Tool::Ellipse => colors.ellipse.clone(),
            Tool::Line => colors.line.clone(),
            Tool::Triangle => colors.triangle.clone(),
            Tool::Text => colors.text.clone(),
        }
    }

    /// Derives the value of `obj` and puts it on top of the current page.
    pub fn add_shape(&mut self, mut obj: DrawingObject) -> Uuid {
        derive_value(&mut obj);
        let id = obj.id;
        let kind = obj.shape.shape_type();
        if self.store.push(self.page_index, obj).is_err() {
            tracing::warn!("Shape id {} already present, not added", id);
            return id;
        }
        tracing::debug!("Added {} {} on page {}", kind, id, self.page_index);
        self.is_modified = true;
        id
    }

    pub fn aggregator(&self) -> Aggregator<'_> {
        Aggregator::new(&self.config.categories)
    }

    pub fn page_stats(&self) -> PageStats {
        self.aggregator().page_stats(&self.store, self.page_index)
    }

    pub fn document_stats(&self) -> DocumentStats {
        self.aggregator().document_stats(&self.store)
    }

    /// Renders the current page at the current zoom.
    pub fn render_current_page(&self) -> anyhow::Result<Option<RasterImage>> {
        match &self.document {
            Some(doc) => doc
                .render_page(self.page_index, self.viewport.scale())
                .map(Some),
            None => Ok(None),
        }
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }
}
