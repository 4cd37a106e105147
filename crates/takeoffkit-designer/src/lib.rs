//! # TakeoffKit Designer
//!
//! Annotation canvas for measuring document pages. Users draw rectangles,
//! ellipses, lines, triangles and text over a rendered page; every object
//! carries a derived value (area, length or the result of an arithmetic
//! formula) and a color that places it in a take-off category.
//!
//! ## Core Components
//!
//! - **Viewport**: view↔document transform with zoom and pan
//! - **Model**: the closed [`Shape`] variant and its geometry operations
//! - **Evaluator**: restricted arithmetic (`+ - * / ^`, `sqrt`) for text formulas
//! - **Derivation**: keeps each object's value in step with its geometry
//! - **Hit-testing and handles**: selection, move and resize in view space
//! - **Aggregation**: category totals, roof slopes and `wall_final`
//! - **Serialization and export**: project files and SVG overlays
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (interaction context)
//!   ├── Viewport (scale/offset)
//!   ├── PageStore (page -> objects, page slopes)
//!   ├── HitTester + handles
//!   └── Aggregator (category totals)
//!
//! Collaborators (implemented by the host)
//!   ├── PageSource / DocumentOpener (page rendering)
//!   ├── TextMetrics
//!   └── UserPrompt
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use takeoffkit_designer::{BlankOpener, DesignerState, NoPrompt, Tool};
//!
//! let mut state = DesignerState::new();
//! state.open_document("plan.pdf".as_ref(), &BlankOpener { pages: 1 });
//! state.toggle_tool(Tool::Ellipse);
//! state.on_press(100.0, 100.0, &mut NoPrompt);
//! println!("{:?}", state.page_stats().lines);
//! ```

pub mod aggregation;
pub mod collaborators;
pub mod derive;
pub mod designer_state;
pub mod eval;
pub mod export;
pub mod geometry;
pub mod handles;
pub mod model;
pub mod page_store;
pub mod serialization;
pub mod viewport;

pub use aggregation::{
    slope_from_rise, Aggregator, CategoryTotals, Contribution, DocumentStats, PageStats,
    SlopePresets,
};
pub use collaborators::{
    BlankDocument, BlankOpener, DocumentOpener, NoPrompt, NominalTextMetrics, PageSource,
    RasterImage, TextMetrics, UserPrompt,
};
pub use derive::derive_value;
pub use designer_state::{DeleteOutcome, DesignerState, DragState, Mode, Preview, SlopeTarget, Tool};
pub use eval::{eval_and_truncate_3, evaluate, format_result, Expr};
pub use export::{ExportDocument, ExportPage, ExportPrimitive, Exporter, SvgOverlayExporter};
pub use handles::resize_by_handle;
pub use hit_test::{HitRegion, HitTester};
pub use model::{
    DesignEllipse, DesignLine, DesignRectangle, DesignText, DesignTriangle, DesignerShape,
    DrawingObject, Point, Shape, ShapeType,
};
pub use page_store::PageStore;
pub use serialization::{ProjectFile, ProjectMetadata, ShapeData, FILE_FORMAT_VERSION};
pub use viewport::Viewport;
