//! Shared numeric constants.
//!
//! These are the defaults; `takeoffkit-settings` can override the interaction
//! tolerances per installation.

/// Distance in view pixels within which a pointer counts as touching an edge.
pub const HIT_TOLERANCE_PX: f64 = 6.0;

/// Half side of the square hit region around a resize handle, in view pixels.
pub const HANDLE_HALF_SIZE_PX: f64 = 6.0;

/// Band around the normalized ellipse boundary (|d - 1|) that counts as edge.
pub const ELLIPSE_EDGE_BAND: f64 = 0.05;

/// Zoom multiplier applied per zoom-in step (divided on zoom-out).
pub const ZOOM_STEP: f64 = 1.25;

/// Nominal text size in view pixels at scale 1.0.
pub const TEXT_FONT_PX: f64 = 14.0;

/// Smallest text size drawn on screen regardless of zoom.
pub const MIN_TEXT_FONT_PX: f64 = 10.0;

/// Radius in view pixels of the circle created by a single ellipse click.
pub const ELLIPSE_CLICK_RADIUS_PX: f64 = 40.0;

/// Nominal text bounding box at scale 1.0 (width, height) in view pixels.
pub const TEXT_BOX_PX: (f64, f64) = (60.0, 25.0);

/// Decimal places kept on stored shape values.
pub const STORED_VALUE_PLACES: u32 = 5;

/// Decimal places shown in formula lines.
pub const FORMULA_PLACES: usize = 3;

/// Color assigned to shapes that have none.
pub const DEFAULT_COLOR: &str = "black";
