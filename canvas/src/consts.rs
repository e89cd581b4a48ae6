//! Shared numeric and color constants for the canvas crate.

// ── Viewport ────────────────────────────────────────────────────

/// Initial zoom: pixels per grid cell.
pub const DEFAULT_SCALE: f64 = 30.0;

/// Smallest allowed cell size in pixels.
pub const MIN_SCALE: f64 = 2.0;

/// Largest allowed cell size in pixels.
pub const MAX_SCALE: f64 = 400.0;

/// Wheel-up zoom factor.
pub const ZOOM_IN_FACTOR: f64 = 1.1;

/// Wheel-down zoom factor.
pub const ZOOM_OUT_FACTOR: f64 = 0.9;

// ── Grid lines ──────────────────────────────────────────────────

/// Every n-th line gets the major emphasis color.
pub const MAJOR_LINE_INTERVAL: i64 = 5;

/// Stroke width of grid lines in CSS pixels.
pub const GRID_LINE_WIDTH: f64 = 0.5;

pub const BACKGROUND_COLOR: &str = "#FFFFFF";
pub const GRID_MINOR_COLOR: &str = "#EEE";
pub const GRID_MAJOR_COLOR: &str = "#888";
/// Vertical line through grid x = 0.
pub const ORIGIN_VERTICAL_COLOR: &str = "#00ffcc";
/// Horizontal line through grid y = 0.
pub const ORIGIN_HORIZONTAL_COLOR: &str = "#ff3366";

// ── Layers ──────────────────────────────────────────────────────

/// Opacity of the layer drawn beneath the current one.
pub const GHOST_ALPHA: f64 = 0.2;

pub const LAYER_LABEL_COLOR: &str = "#1F1A17";
pub const LAYER_LABEL_FONT: &str = "bold 24px sans-serif";

// ── Export ──────────────────────────────────────────────────────

/// A4 landscape width in millimetres.
pub const PAGE_WIDTH_MM: f32 = 297.0;

/// A4 landscape height in millimetres.
pub const PAGE_HEIGHT_MM: f32 = 210.0;

/// Resolution images are embedded at before being stretched to the page.
pub const EXPORT_DPI: f32 = 96.0;
