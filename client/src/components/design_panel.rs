//! Design name, save/load controls, and PDF export buttons.
//!
//! SYSTEM CONTEXT
//! ==============
//! Network flows run in `spawn_local` through `persistence::Persistence` over
//! the HTTP backend. Results land in `DesignsState`; loaded grids and client
//! exports are handed to the canvas host through the command queue. Every
//! failure ends in a blocking alert and leaves the editor usable.

use leptos::prelude::*;

use crate::state::designs::DesignsState;
use crate::state::ui::{EditorCommand, EditorCommands};

#[cfg(feature = "csr")]
use crate::net::api::{HttpBackend, export_pdf_url};
#[cfg(feature = "csr")]
use crate::persistence::Persistence;
#[cfg(feature = "csr")]
use crate::state::document::DocumentState;
#[cfg(feature = "csr")]
use crate::util::{dialog, download};

#[cfg(feature = "csr")]
fn service() -> Persistence<HttpBackend> {
    Persistence::new(HttpBackend::default())
}

#[cfg(feature = "csr")]
fn refresh_designs(designs: RwSignal<DesignsState>) {
    leptos::task::spawn_local(async move {
        match service().refresh().await {
            Ok(list) => designs.update(|d| d.set_designs(list)),
            Err(err) => dialog::report("list designs", &err),
        }
    });
}

/// Bottom panel for saving, loading, and exporting designs.
#[component]
pub fn DesignPanel() -> impl IntoView {
    let designs = expect_context::<RwSignal<DesignsState>>();
    let commands = expect_context::<RwSignal<EditorCommands>>();

    #[cfg(feature = "csr")]
    let document = expect_context::<RwSignal<DocumentState>>();

    #[cfg(feature = "csr")]
    refresh_designs(designs);

    let busy = move || designs.get().busy;

    let on_save = move |_ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            let state = designs.get_untracked();
            let grid = document.get_untracked().grid;
            designs.update(|d| d.busy = true);
            leptos::task::spawn_local(async move {
                let result = service().save(&state.name, &grid, &state.designs, dialog::confirm).await;
                designs.update(|d| d.busy = false);
                match result {
                    Ok(saved) => {
                        dialog::alert("Saved");
                        match saved.designs {
                            Ok(list) => designs.update(|d| d.set_designs(list)),
                            Err(err) => dialog::report("list designs", &err),
                        }
                    }
                    Err(err) => dialog::report("save design", &err),
                }
            });
        }
    };

    let on_load = move |_ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            let Some(id) = designs.get_untracked().selected else {
                return;
            };
            designs.update(|d| d.busy = true);
            leptos::task::spawn_local(async move {
                let result = service().load(id).await;
                designs.update(|d| d.busy = false);
                match result {
                    Ok(grid) => {
                        commands.update(|q| q.push(EditorCommand::LoadDesign(grid)));
                        dialog::alert("Loaded");
                    }
                    Err(err) => dialog::report("load design", &err),
                }
            });
        }
    };

    let on_server_export = move |_ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            let state = designs.get_untracked();
            let grid = document.get_untracked().grid;
            designs.update(|d| d.busy = true);
            leptos::task::spawn_local(async move {
                let result = service()
                    .resolve_export_target(state.selected, &state.name, &grid, &state.designs, dialog::confirm)
                    .await;
                designs.update(|d| d.busy = false);
                match result {
                    Ok(target) => {
                        if let Some(list) = target.refreshed {
                            designs.update(|d| d.set_designs(list));
                        }
                        let url = HttpBackend::default().config().url(&export_pdf_url(target.id, state.floor_height));
                        if let Err(err) = download::navigate(&url) {
                            log::error!("server export navigation failed: {err:?}");
                        }
                    }
                    Err(err) => dialog::report("server export", &err),
                }
            });
        }
    };

    let on_export_layer = move |_ev: leptos::ev::MouseEvent| {
        commands.update(|q| q.push(EditorCommand::ExportCurrentLayer));
    };
    let on_export_all = move |_ev: leptos::ev::MouseEvent| {
        commands.update(|q| q.push(EditorCommand::ExportAllLayers));
    };

    view! {
        <div class="design-panel">
            <input
                class="design-panel__name"
                type="text"
                placeholder="Design name"
                prop:value=move || designs.get().name
                on:input=move |ev| {
                    let name = event_target_value(&ev);
                    designs.update(|d| d.name = name);
                }
            />
            <button class="btn" on:click=on_save disabled=busy>"Save"</button>

            <select
                class="design-panel__select"
                prop:value=move || designs.get().selected_value()
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    designs.update(|d| d.select_value(&value));
                }
            >
                {move || {
                    designs
                        .get()
                        .options()
                        .into_iter()
                        .map(|option| view! { <option value=option.value>{option.label}</option> })
                        .collect_view()
                }}
            </select>
            <button class="btn" on:click=on_load disabled=busy>"Load"</button>

            <span class="design-panel__divider"></span>

            <label class="design-panel__floor-height">
                "Floor height "
                <input
                    type="number"
                    min="1"
                    prop:value=move || designs.get().floor_height.to_string()
                    on:change=move |ev| {
                        let raw = event_target_value(&ev);
                        designs.update(|d| d.set_floor_height(&raw));
                    }
                />
            </label>
            <button class="btn" on:click=on_export_layer>"PDF (layer)"</button>
            <button class="btn" on:click=on_export_all>"PDF (all layers)"</button>
            <button class="btn" on:click=on_server_export disabled=busy>"PDF (server)"</button>
        </div>
    }
}
