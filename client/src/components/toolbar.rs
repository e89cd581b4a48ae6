//! Status bar showing mode, layer, and the selected brush, with the
//! ghost-layer toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything displayed here is read from the `EditorUi` mirror; the only
//! control (ghost layer) goes through the command queue like the palette.

use leptos::prelude::*;

use crate::state::ui::{EditorCommand, EditorCommands, EditorUi};

/// Top toolbar for the editor page.
#[component]
pub fn Toolbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<EditorUi>>();
    let commands = expect_context::<RwSignal<EditorCommands>>();

    let on_ghost_toggle = move |ev: leptos::ev::Event| {
        let enabled = event_target_checked(&ev);
        commands.update(|q| q.push(EditorCommand::SetGhostLayer(enabled)));
    };

    view! {
        <div class="toolbar">
            <span class="toolbar__title">"Blueprint"</span>
            <span class="toolbar__divider"></span>

            <span class="toolbar__item">
                "Mode: "
                <span class="toolbar__mode">{move || ui.get().mode_label()}</span>
            </span>
            <span class="toolbar__item">
                "Layer: "
                <span class="toolbar__layer">{move || ui.get().layer}</span>
            </span>
            <span class="toolbar__item">
                "Brush: "
                <span class="toolbar__brush" style:color=move || ui.get().brush_color()>
                    {move || ui.get().brush_label()}
                </span>
            </span>

            <span class="toolbar__spacer"></span>

            <label class="toolbar__ghost" title="Show the layer below faintly">
                <input type="checkbox" prop:checked=move || ui.get().ghost_layer on:change=on_ghost_toggle/>
                "Ghost layer"
            </label>
            <span class="toolbar__hint">"M: mode  E/Q: layer up/down  wheel: zoom"</span>
        </div>
    }
}
