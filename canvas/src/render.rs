//! Rendering: draws the editor scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of grid, viewport and UI state and produces
//! pixels. It does not mutate any application state.
//!
//! Line placement and coloring are computed by pure helpers ([`grid_lines`],
//! [`line_color`], [`cell_visible`]) so they can be tested without a browser.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::{GridPos, Viewport};
use crate::config::EditorConfig;
use crate::consts::{
    BACKGROUND_COLOR, GRID_LINE_WIDTH, GRID_MAJOR_COLOR, GRID_MINOR_COLOR, LAYER_LABEL_COLOR, LAYER_LABEL_FONT,
    ORIGIN_HORIZONTAL_COLOR, ORIGIN_VERTICAL_COLOR,
};
use crate::grid::{GridStore, Layer};
use crate::input::UiState;

/// Margin of the "Layer N" label on exported pages, in CSS pixels.
const LABEL_MARGIN_PX: f64 = 20.0;

/// Orientation of a family of grid lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Lines of constant screen x (one per grid column boundary).
    Vertical,
    /// Lines of constant screen y (one per grid row boundary).
    Horizontal,
}

/// One grid line to stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    /// Screen coordinate along the perpendicular axis (x for vertical lines).
    pub pos: f64,
    /// Grid index of the boundary this line sits on.
    pub index: i64,
    pub color: &'static str,
}

/// Color for the line at grid `index`: origin highlight, major emphasis, or faint.
#[must_use]
pub fn line_color(index: i64, axis: Axis, major_interval: i64) -> &'static str {
    if index == 0 {
        return match axis {
            Axis::Vertical => ORIGIN_VERTICAL_COLOR,
            Axis::Horizontal => ORIGIN_HORIZONTAL_COLOR,
        };
    }
    if major_interval > 0 && index.rem_euclid(major_interval) == 0 {
        GRID_MAJOR_COLOR
    } else {
        GRID_MINOR_COLOR
    }
}

/// Every cell boundary visible in `[0, extent)` along `axis`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn grid_lines(viewport: &Viewport, extent: f64, axis: Axis, major_interval: i64) -> Vec<GridLine> {
    let scale = viewport.scale;
    if !scale.is_finite() || scale <= 0.0 || !extent.is_finite() || extent <= 0.0 {
        return Vec::new();
    }
    let offset = match axis {
        Axis::Vertical => viewport.offset_x,
        Axis::Horizontal => viewport.offset_y,
    };
    let start = offset.rem_euclid(scale);
    let mut lines = Vec::new();
    let mut n = 0_u32;
    loop {
        let pos = start + f64::from(n) * scale;
        if pos >= extent {
            break;
        }
        let index = ((pos - offset) / scale).round() as i64;
        lines.push(GridLine { pos, index, color: line_color(index, axis, major_interval) });
        n += 1;
    }
    lines
}

/// Whether a cell with top-left corner `(x, y)` overlaps the viewport.
#[must_use]
pub fn cell_visible(x: f64, y: f64, size: f64, width: f64, height: f64) -> bool {
    x + size > 0.0 && y + size > 0.0 && x < width && y < height
}

/// Layer drawn faintly beneath the current one, if any: `layer - 1` when the
/// ghost option is on and the current layer is above 0.
#[must_use]
pub fn ghost_layer(ui: &UiState) -> Option<Layer> {
    if ui.ghost_layer { ui.layer.checked_sub(1) } else { None }
}

/// Draw the full editor frame: background, grid lines, ghost layer, current layer.
///
/// `width` and `height` are in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
#[allow(clippy::too_many_arguments)]
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    grid: &GridStore,
    viewport: &Viewport,
    ui: &UiState,
    config: &EditorConfig,
    width: f64,
    height: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    clear(ctx, width, height, dpr)?;
    draw_grid_lines(ctx, viewport, config, width, height);

    if let Some(ghost) = ghost_layer(ui) {
        ctx.save();
        ctx.set_global_alpha(config.ghost_alpha);
        draw_layer(ctx, grid, viewport, ghost, width, height);
        ctx.restore();
    }
    draw_layer(ctx, grid, viewport, ui.layer, width, height);
    Ok(())
}

/// Draw one layer as a standalone export page: grid, that layer's cells, and a
/// "Layer N" caption. No ghost layer.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
#[allow(clippy::too_many_arguments)]
pub fn draw_export_page(
    ctx: &CanvasRenderingContext2d,
    grid: &GridStore,
    viewport: &Viewport,
    config: &EditorConfig,
    layer: Layer,
    width: f64,
    height: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    clear(ctx, width, height, dpr)?;
    draw_grid_lines(ctx, viewport, config, width, height);
    draw_layer(ctx, grid, viewport, layer, width, height);

    ctx.save();
    ctx.set_fill_style_str(LAYER_LABEL_COLOR);
    ctx.set_font(LAYER_LABEL_FONT);
    ctx.set_text_align("left");
    ctx.set_text_baseline("top");
    ctx.fill_text(&format!("Layer {layer}"), LABEL_MARGIN_PX, LABEL_MARGIN_PX)?;
    ctx.restore();
    Ok(())
}

// =============================================================
// Helpers
// =============================================================

fn clear(ctx: &CanvasRenderingContext2d, width: f64, height: f64, dpr: f64) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.set_global_alpha(1.0);
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_fill_style_str(BACKGROUND_COLOR);
    ctx.fill_rect(0.0, 0.0, width, height);
    Ok(())
}

fn draw_grid_lines(ctx: &CanvasRenderingContext2d, viewport: &Viewport, config: &EditorConfig, width: f64, height: f64) {
    ctx.set_line_width(GRID_LINE_WIDTH);

    for line in grid_lines(viewport, width, Axis::Vertical, config.major_line_interval) {
        ctx.set_stroke_style_str(line.color);
        ctx.begin_path();
        ctx.move_to(line.pos, 0.0);
        ctx.line_to(line.pos, height);
        ctx.stroke();
    }
    for line in grid_lines(viewport, height, Axis::Horizontal, config.major_line_interval) {
        ctx.set_stroke_style_str(line.color);
        ctx.begin_path();
        ctx.move_to(0.0, line.pos);
        ctx.line_to(width, line.pos);
        ctx.stroke();
    }
}

fn draw_layer(
    ctx: &CanvasRenderingContext2d,
    grid: &GridStore,
    viewport: &Viewport,
    layer: Layer,
    width: f64,
    height: f64,
) {
    let size = viewport.scale;
    for (x, y, block) in grid.layer_entries(layer) {
        let corner = viewport.grid_to_screen(GridPos::new(x, y));
        if !cell_visible(corner.x, corner.y, size, width, height) {
            continue;
        }
        ctx.set_fill_style_str(block.color());
        ctx.fill_rect(corner.x, corner.y, size, size);
    }
}
