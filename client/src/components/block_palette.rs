//! Palette of block brushes plus the eraser.
//!
//! DESIGN
//! ======
//! Buttons only enqueue `EditorCommand::SetBrush`; the highlighted button
//! follows the engine's brush as mirrored in `EditorUi`.

#[cfg(test)]
#[path = "block_palette_test.rs"]
mod block_palette_test;

use leptos::prelude::*;

use canvas::block::{BlockKind, Brush};

use crate::state::ui::{EditorCommand, EditorCommands, EditorUi};

/// Inline style of one palette button. The selected one gets an accent border.
fn swatch_style(brush: Brush, selected: bool) -> String {
    let (background, color) = match brush {
        Brush::Block(kind) => (kind.color(), kind.text_color()),
        Brush::Eraser => ("#ffffff", "black"),
    };
    let border = if selected { brush.indicator_color() } else { "transparent" };
    format!("background:{background};color:{color};border-color:{border}")
}

/// Vertical strip with one button per block kind and an eraser.
#[component]
pub fn BlockPalette() -> impl IntoView {
    let ui = expect_context::<RwSignal<EditorUi>>();
    let commands = expect_context::<RwSignal<EditorCommands>>();

    let brushes = BlockKind::ALL.into_iter().map(Brush::Block).chain(std::iter::once(Brush::Eraser));

    view! {
        <div class="block-palette">
            {brushes
                .map(|brush| {
                    let is_active = move || ui.get().brush == brush;
                    let on_click = move |_ev: leptos::ev::MouseEvent| {
                        commands.update(|q| q.push(EditorCommand::SetBrush(brush)));
                    };
                    view! {
                        <button
                            class="block-palette__btn"
                            class:block-palette__btn--active=is_active
                            style=move || swatch_style(brush, is_active())
                            title=brush.label()
                            on:click=on_click
                        >
                            {brush.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
