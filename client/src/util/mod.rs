//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (dialogs, downloads, DOM event
//! mapping) from component logic so the pure parts stay testable.

pub mod canvas_input;
pub mod canvas_viewport;
pub mod dialog;
pub mod download;
