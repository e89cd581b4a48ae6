//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{
    block_palette::BlockPalette, canvas_host::CanvasHost, design_panel::DesignPanel, toolbar::Toolbar,
};
use crate::state::designs::DesignsState;
use crate::state::document::DocumentState;
use crate::state::ui::{EditorCommands, EditorUi};

/// Root application component.
///
/// Provides the shared state signals and lays out the editor page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(EditorUi::default());
    let commands = RwSignal::new(EditorCommands::default());
    let document = RwSignal::new(DocumentState::default());
    let designs = RwSignal::new(DesignsState::default());

    provide_context(ui);
    provide_context(commands);
    provide_context(document);
    provide_context(designs);

    view! {
        <Title text="Blueprint"/>
        <div class="editor">
            <Toolbar/>
            <div class="editor__body">
                <BlockPalette/>
                <CanvasHost/>
            </div>
            <DesignPanel/>
        </div>
    }
}
