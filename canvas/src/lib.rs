//! Canvas rendering and input engine for the blueprint editor.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of the editing surface: translating raw DOM input events into
//! grid mutations, maintaining the viewport for pan/zoom, drawing the grid and
//! its layers, and rasterizing layers into PDF pages. The host UI layer is
//! responsible only for wiring DOM events to the engine and applying the
//! resulting [`engine::Action`]s to its own chrome.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`grid`] | Sparse layer/x/y block store and its wire format |
//! | [`block`] | Block kinds, display labels/colors, and the paint brush |
//! | [`camera`] | Pan/zoom viewport and screen/grid conversions |
//! | [`input`] | Input event types, editor mode, and the gesture state machine |
//! | [`render`] | Canvas2D drawing of grid lines, ghost layer, and active layer |
//! | [`export`] | Page planning and PDF assembly from captured layer images |
//! | [`config`] | Tunable editor settings with defaults |
//! | [`consts`] | Shared numeric and color constants |

pub mod block;
pub mod camera;
pub mod config;
pub mod consts;
pub mod engine;
pub mod export;
pub mod grid;
pub mod input;
pub mod render;
