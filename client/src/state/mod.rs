//! Reactive application state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each type here is wrapped in an `RwSignal` by `app::App`. Components read
//! them for rendering; only the canvas host and the design panel write.

pub mod designs;
pub mod document;
pub mod ui;
