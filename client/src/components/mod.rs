//! Editor page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from Leptos context providers. Only
//! `canvas_host` talks to the engine; the rest enqueue editor commands.

pub mod block_palette;
pub mod canvas_host;
pub mod design_panel;
pub mod toolbar;
