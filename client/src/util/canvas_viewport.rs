//! Canvas size synchronization between the DOM and the engine.

#[cfg(feature = "csr")]
use leptos::prelude::*;

#[cfg(feature = "csr")]
use canvas::engine::Engine;

/// Read the canvas element's CSS size and the device pixel ratio, then push
/// them to the engine, which resizes the backing store to match.
///
/// Called on mount and on every window resize.
#[cfg(feature = "csr")]
pub fn sync_viewport(engine: &mut Engine, canvas_ref: &NodeRef<leptos::html::Canvas>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(canvas) = canvas_ref.get_untracked() else {
        return;
    };
    let width = f64::from(canvas.client_width()).max(1.0);
    let height = f64::from(canvas.client_height()).max(1.0);
    let dpr = window.device_pixel_ratio().max(1.0);
    engine.set_viewport(width, height, dpr);
}
