//! # TakeoffKit
//!
//! Quantity take-off on top of paged documents. Users draw rectangles,
//! ellipses, lines, triangles and formula texts on a page; every shape
//! carries a derived value that is summed per color category.
//!
//! ## Architecture
//!
//! TakeoffKit is organized as a workspace with multiple crates:
//!
//! 1. **takeoffkit-core** - Errors, categories, numeric formatting
//! 2. **takeoffkit-settings** - Configuration file and color table
//! 3. **takeoffkit-designer** - Shapes, viewport, hit-testing, evaluator, aggregation, projects
//! 4. **takeoffkit** - Library facade and logging setup
//! 5. **takeoffkit-cli** - The headless `takeoffkit` command
//!
//! ## Features
//!
//! - **Interactive Editing**: Draw, select, move and resize shapes through a single state machine
//! - **Formula Texts**: Restricted arithmetic evaluator with three-decimal truncation
//! - **Category Totals**: Wall, roof, bshita, koya, window and door with roof slopes
//! - **Projects**: JSON project files and per-page SVG overlays

pub use takeoffkit_designer as designer;
pub use takeoffkit_settings as settings;

pub use takeoffkit_core::{
    format_fixed, round_stored, truncate_3, Category, Error, EvaluationError, ProjectError,
    Result,
};

pub use takeoffkit_designer::{
    derive_value, evaluate, slope_from_rise, Aggregator, CategoryTotals, DesignerState,
    DocumentStats, DrawingObject, ExportDocument, Exporter, Mode, PageStats, PageStore,
    ProjectFile, Shape, SvgOverlayExporter, Tool, Viewport,
};

pub use takeoffkit_settings::{CategorySettings, Config};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Log lines go to stderr so command output on stdout stays clean.
/// `RUST_LOG` refines the default `info` level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
