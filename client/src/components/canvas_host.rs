//! Bridge component between Leptos state and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The engine lives in an `Rc<RefCell<Option<Engine>>>` owned by this host.
//! DOM events become `InputEvent`s, chrome requests arrive through the
//! `EditorCommands` queue, and every resulting `Action` is folded back into
//! the `EditorUi` and `DocumentState` mirrors. Renders are coalesced into one
//! per animation frame.

use leptos::prelude::*;

use crate::state::ui::EditorUi;

#[cfg(feature = "csr")]
use crate::state::designs::DesignError;
#[cfg(feature = "csr")]
use crate::state::document::DocumentState;
#[cfg(feature = "csr")]
use crate::state::ui::{EditorCommand, EditorCommands};
#[cfg(feature = "csr")]
use crate::util::canvas_input::{map_button, pointer_point, should_prevent_default_key, wheel_point};
#[cfg(feature = "csr")]
use crate::util::canvas_viewport::sync_viewport;
#[cfg(feature = "csr")]
use crate::util::{dialog, download};

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use canvas::engine::{Action, Engine};
#[cfg(feature = "csr")]
use canvas::export::ExportError;
#[cfg(feature = "csr")]
use canvas::grid::Layer;
#[cfg(feature = "csr")]
use canvas::input::{InputEvent, Key, WheelDelta};
#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "csr")]
type EngineCell = Rc<RefCell<Option<Engine>>>;

/// Signals the host writes back into.
#[cfg(feature = "csr")]
#[derive(Clone, Copy)]
struct HostSignals {
    ui: RwSignal<EditorUi>,
    document: RwSignal<DocumentState>,
    raf_pending: RwSignal<bool>,
}

#[cfg(feature = "csr")]
fn render_now(engine: &EngineCell) {
    if let Some(engine) = engine.borrow().as_ref() {
        if let Err(err) = engine.render() {
            log::error!("render failed: {err:?}");
        }
    }
}

#[cfg(feature = "csr")]
fn request_render(engine: &EngineCell, raf_pending: RwSignal<bool>) {
    if raf_pending.get_untracked() {
        return;
    }
    raf_pending.set(true);

    let Some(window) = web_sys::window() else {
        raf_pending.set(false);
        render_now(engine);
        return;
    };

    let engine_for_cb = Rc::clone(engine);
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        raf_pending.set(false);
        render_now(&engine_for_cb);
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
        *holder.borrow_mut() = Some(cb);
    } else {
        raf_pending.set(false);
        render_now(engine);
    }
}

/// Run `f` against the mounted engine. The borrow ends before actions are processed.
#[cfg(feature = "csr")]
fn with_engine<R>(engine: &EngineCell, f: impl FnOnce(&mut Engine) -> R) -> Option<R> {
    engine.borrow_mut().as_mut().map(f)
}

#[cfg(feature = "csr")]
fn process_actions(actions: &[Action], engine: &EngineCell, signals: HostSignals) {
    if actions.is_empty() {
        return;
    }
    signals
        .ui
        .maybe_update(|ui| actions.iter().fold(false, |changed, action| ui.apply(action) || changed));
    signals
        .document
        .maybe_update(|doc| actions.iter().fold(false, |changed, action| doc.apply(action) || changed));
    if actions.iter().any(|action| matches!(action, Action::RenderNeeded)) {
        request_render(engine, signals.raf_pending);
    }
}

#[cfg(feature = "csr")]
fn dispatch(engine: &EngineCell, event: InputEvent, signals: HostSignals) {
    if let Some(actions) = with_engine(engine, |engine| engine.handle_input(event)) {
        process_actions(&actions, engine, signals);
    }
}

#[cfg(feature = "csr")]
fn deliver_pdf(result: Option<Result<Vec<u8>, ExportError>>, layer: Option<Layer>) {
    match result {
        Some(Ok(bytes)) => {
            let file_name = download::export_file_name(layer);
            if let Err(err) = download::download_bytes(&bytes, &file_name, download::PDF_MIME) {
                log::error!("pdf download failed: {err:?}");
                dialog::alert("Download failed");
            }
        }
        Some(Err(err)) => dialog::report("pdf export", &DesignError::from(err)),
        None => log::warn!("pdf export requested before the canvas mounted"),
    }
}

#[cfg(feature = "csr")]
fn apply_command(command: EditorCommand, engine: &EngineCell, signals: HostSignals) {
    match command {
        EditorCommand::SetBrush(brush) => {
            let actions = with_engine(engine, |engine| engine.set_brush(brush)).unwrap_or_default();
            process_actions(&actions, engine, signals);
        }
        EditorCommand::SetGhostLayer(enabled) => {
            let actions = with_engine(engine, |engine| engine.set_ghost_layer(enabled)).unwrap_or_default();
            signals.ui.update(|ui| ui.ghost_layer = enabled);
            process_actions(&actions, engine, signals);
        }
        EditorCommand::LoadDesign(grid) => {
            signals.document.update(|doc| doc.replace(grid.clone()));
            let actions = with_engine(engine, |engine| engine.load_design(grid)).unwrap_or_default();
            process_actions(&actions, engine, signals);
        }
        EditorCommand::ExportCurrentLayer => {
            let layer = signals.ui.get_untracked().layer;
            deliver_pdf(with_engine(engine, |engine| engine.export_current_layer()), Some(layer));
        }
        EditorCommand::ExportAllLayers => {
            deliver_pdf(with_engine(engine, |engine| engine.export_all_layers()), None);
        }
    }
}

#[cfg(feature = "csr")]
fn listen_for_resize(engine: &EngineCell, canvas_ref: NodeRef<leptos::html::Canvas>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let engine = Rc::clone(engine);
    let on_resize = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
        if with_engine(&engine, |engine| sync_viewport(engine, &canvas_ref)).is_some() {
            render_now(&engine);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);
    match window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref()) {
        // The listener lives as long as the page.
        Ok(()) => on_resize.forget(),
        Err(err) => log::warn!("could not listen for resize: {err:?}"),
    }
}

/// Canvas host component.
///
/// Mounts `canvas::engine::Engine` on the `<canvas>` element, forwards pointer,
/// wheel, and key events to it, and applies queued editor commands.
#[component]
pub fn CanvasHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<EditorUi>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "csr")]
    let engine: EngineCell = Rc::new(RefCell::new(None));
    #[cfg(feature = "csr")]
    let signals = HostSignals {
        ui,
        document: expect_context::<RwSignal<DocumentState>>(),
        raf_pending: RwSignal::new(false),
    };

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }

            let mut instance = Engine::new(canvas.clone());
            sync_viewport(&mut instance, &canvas_ref);
            instance.core.center_origin();
            *engine.borrow_mut() = Some(instance);
            render_now(&engine);
            listen_for_resize(&engine, canvas_ref);
            if let Err(err) = canvas.focus() {
                log::debug!("canvas focus failed: {err:?}");
            }
            log::info!("canvas engine mounted");
        });
    }

    #[cfg(feature = "csr")]
    {
        let commands = expect_context::<RwSignal<EditorCommands>>();
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            commands.track();
            let pending = commands.try_update_untracked(EditorCommands::drain).unwrap_or_default();
            if pending.is_empty() {
                return;
            }
            if engine.borrow().is_none() {
                log::warn!("dropping {} editor command(s): canvas not mounted", pending.len());
                return;
            }
            let refocus = pending.iter().any(EditorCommand::refocuses_canvas);
            for command in pending {
                apply_command(command, &engine, signals);
            }
            if refocus {
                if let Some(canvas) = canvas_ref.get_untracked() {
                    if let Err(err) = canvas.focus() {
                        log::debug!("canvas focus failed: {err:?}");
                    }
                }
            }
        });
    }

    let on_pointer_down = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                if let Some(canvas) = canvas_ref.get_untracked() {
                    if let Err(err) = canvas.focus() {
                        log::debug!("canvas focus failed: {err:?}");
                    }
                    if let Err(err) = canvas.set_pointer_capture(ev.pointer_id()) {
                        log::debug!("pointer capture failed: {err:?}");
                    }
                }
                let event = InputEvent::PointerDown { screen: pointer_point(&ev), button: map_button(ev.button()) };
                dispatch(&engine, event, signals);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                dispatch(&engine, InputEvent::PointerMove { screen: pointer_point(&ev) }, signals);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                dispatch(&engine, InputEvent::PointerUp { screen: pointer_point(&ev) }, signals);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    // Leaving the canvas ends a stroke or pan, same as releasing the button.
    let on_pointer_leave = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                dispatch(&engine, InputEvent::PointerUp { screen: pointer_point(&ev) }, signals);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_wheel = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::WheelEvent| {
                ev.prevent_default();
                let delta = WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() };
                dispatch(&engine, InputEvent::Wheel { screen: wheel_point(&ev), delta }, signals);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::WheelEvent| {}
        }
    };

    let on_key_down = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::KeyboardEvent| {
                let key = ev.key();
                if should_prevent_default_key(&key) {
                    ev.prevent_default();
                }
                dispatch(&engine, InputEvent::KeyDown(Key(key)), signals);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::KeyboardEvent| {}
        }
    };

    view! {
        <div class="canvas-container">
            <canvas
                class="canvas-host"
                node_ref=canvas_ref
                tabindex="0"
                style:cursor=move || ui.get().cursor
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointerleave=on_pointer_leave
                on:wheel=on_wheel
                on:keydown=on_key_down
            >
                "Your browser does not support canvas."
            </canvas>
        </div>
    }
}
