//! Tunable editor settings.
//!
//! Every field defaults to the matching value in [`crate::consts`]. Hosts may
//! deserialize a partial JSON object over the defaults, e.g.
//! `{"initial_scale": 20.0}`, and hand it to [`crate::engine::EngineCore::with_config`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    DEFAULT_SCALE, GHOST_ALPHA, MAJOR_LINE_INTERVAL, MAX_SCALE, MIN_SCALE, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR,
};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Pixels per cell when the editor starts.
    pub initial_scale: f64,
    /// Lower bound for `scale` after zooming.
    pub min_scale: f64,
    /// Upper bound for `scale` after zooming.
    pub max_scale: f64,
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
    /// Opacity of the ghost layer, 0.0 to 1.0.
    pub ghost_alpha: f64,
    pub major_line_interval: i64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_scale: DEFAULT_SCALE,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            zoom_in_factor: ZOOM_IN_FACTOR,
            zoom_out_factor: ZOOM_OUT_FACTOR,
            ghost_alpha: GHOST_ALPHA,
            major_line_interval: MAJOR_LINE_INTERVAL,
        }
    }
}

impl EditorConfig {
    /// Parse a JSON override object on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when `json` is not an object of known fields.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Map a vertical wheel delta to a zoom factor: scrolling down zooms out.
    /// A purely horizontal scroll (`dy == 0`) does not zoom.
    #[must_use]
    pub fn wheel_factor(&self, dy: f64) -> Option<f64> {
        if dy > 0.0 {
            Some(self.zoom_out_factor)
        } else if dy < 0.0 {
            Some(self.zoom_in_factor)
        } else {
            None
        }
    }
}
