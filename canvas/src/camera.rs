#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{DEFAULT_SCALE, MAX_SCALE, MIN_SCALE};

/// A point in screen space (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Integer coordinates of a grid cell within a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Viewport state for pan/zoom over the unbounded grid.
///
/// `offset_x` / `offset_y` are the screen position (CSS pixels) of grid origin.
/// `scale` is the side length of one cell in CSS pixels.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: f64,
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { offset_x: 0.0, offset_y: 0.0, scale: DEFAULT_SCALE, min_scale: MIN_SCALE, max_scale: MAX_SCALE }
    }
}

impl Viewport {
    /// Convert a screen-space point to the cell that contains it.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn screen_to_grid(&self, screen: Point) -> GridPos {
        GridPos {
            x: ((screen.x - self.offset_x) / self.scale).floor() as i32,
            y: ((screen.y - self.offset_y) / self.scale).floor() as i32,
        }
    }

    /// Screen position of the top-left corner of a cell.
    #[must_use]
    pub fn grid_to_screen(&self, cell: GridPos) -> Point {
        Point {
            x: f64::from(cell.x) * self.scale + self.offset_x,
            y: f64::from(cell.y) * self.scale + self.offset_y,
        }
    }

    /// Fractional grid coordinate under a screen point (no flooring).
    #[must_use]
    pub fn screen_to_grid_f(&self, screen: Point) -> Point {
        Point { x: (screen.x - self.offset_x) / self.scale, y: (screen.y - self.offset_y) / self.scale }
    }

    /// Translate the grid by a screen-space delta.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Scale by `factor` while keeping the grid point under `anchor` fixed.
    ///
    /// The resulting scale is clamped to `[min_scale, max_scale]`; the offsets
    /// use the factor actually applied, so the anchor stays put at the limits too.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let next = (self.scale * factor).clamp(self.min_scale, self.max_scale);
        let applied = next / self.scale;
        self.offset_x -= (anchor.x - self.offset_x) * (applied - 1.0);
        self.offset_y -= (anchor.y - self.offset_y) * (applied - 1.0);
        self.scale = next;
    }

    /// Put grid origin at the center of a `width` x `height` viewport.
    pub fn center_on_origin(&mut self, width: f64, height: f64) {
        self.offset_x = width * 0.5;
        self.offset_y = height * 0.5;
    }
}
