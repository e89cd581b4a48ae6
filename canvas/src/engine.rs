use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::block::{BlockKind, Brush};
use crate::camera::{Point, Viewport};
use crate::config::EditorConfig;
use crate::export::{self, ExportError, PageImage};
use crate::grid::{GridStore, Layer};
use crate::input::{Button, InputEvent, InputState, Key, Mode, Shortcut, UiState, WheelDelta};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    CellPainted { layer: Layer, x: i32, y: i32, block: BlockKind },
    CellErased { layer: Layer, x: i32, y: i32 },
    ModeChanged(Mode),
    LayerChanged(Layer),
    BrushChanged(Brush),
    SetCursor(String),
    RenderNeeded,
}

/// Editor state and input handling that does not touch the canvas element.
///
/// Runs natively, so every gesture can be tested without a browser.
pub struct EngineCore {
    pub grid: GridStore,
    pub viewport: Viewport,
    pub ui: UiState,
    pub input: InputState,
    pub config: EditorConfig,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            grid: GridStore::new(),
            viewport: Viewport {
                scale: config.initial_scale,
                min_scale: config.min_scale,
                max_scale: config.max_scale,
                ..Viewport::default()
            },
            ui: UiState::default(),
            input: InputState::default(),
            config,
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }

    // --- Data inputs ---

    /// Replace the whole grid with a loaded design and return to layer 0.
    pub fn load_design(&mut self, grid: GridStore) -> Vec<Action> {
        log::debug!("loaded design with {} cell(s)", grid.cell_count());
        self.grid = grid;
        self.ui.layer = 0;
        self.input = InputState::Idle;
        vec![Action::LayerChanged(0), Action::RenderNeeded]
    }

    /// Record the viewport size in CSS pixels and the device pixel ratio.
    pub fn set_viewport(&mut self, width: f64, height: f64, dpr: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.dpr = dpr;
    }

    /// Pan so grid origin sits at the center of the viewport.
    pub fn center_origin(&mut self) {
        self.viewport.center_on_origin(self.viewport_width, self.viewport_height);
    }

    // --- Brush / mode / layer ---

    pub fn set_brush(&mut self, brush: Brush) -> Vec<Action> {
        self.ui.brush = brush;
        vec![Action::BrushChanged(brush)]
    }

    /// Flip between edit and move mode. Any gesture in progress ends.
    pub fn toggle_mode(&mut self) -> Vec<Action> {
        self.ui.mode = self.ui.mode.toggled();
        self.input = InputState::Idle;
        vec![Action::ModeChanged(self.ui.mode), Action::SetCursor(self.ui.mode.cursor().to_owned())]
    }

    /// Move `delta` layers up (positive) or down (negative), never below 0.
    pub fn change_layer(&mut self, delta: i64) -> Vec<Action> {
        let target = (i64::from(self.ui.layer) + delta).clamp(0, i64::from(Layer::MAX));
        self.set_layer(Layer::try_from(target).unwrap_or(Layer::MAX))
    }

    pub fn set_layer(&mut self, layer: Layer) -> Vec<Action> {
        if layer == self.ui.layer {
            return Vec::new();
        }
        self.ui.layer = layer;
        vec![Action::LayerChanged(layer), Action::RenderNeeded]
    }

    pub fn set_ghost_layer(&mut self, enabled: bool) -> Vec<Action> {
        if enabled == self.ui.ghost_layer {
            return Vec::new();
        }
        self.ui.ghost_layer = enabled;
        vec![Action::RenderNeeded]
    }

    // --- Input events ---

    /// Route one host event to its handler.
    pub fn handle_input(&mut self, event: InputEvent) -> Vec<Action> {
        match event {
            InputEvent::PointerDown { screen, button } => self.on_pointer_down(screen, button),
            InputEvent::PointerMove { screen } => self.on_pointer_move(screen),
            InputEvent::PointerUp { screen } => self.on_pointer_up(screen),
            InputEvent::Wheel { screen, delta } => self.on_wheel(screen, delta),
            InputEvent::KeyDown(key) => self.on_key_down(&key),
        }
    }

    pub fn on_pointer_down(&mut self, screen: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        match self.ui.mode {
            Mode::Edit => {
                self.input = InputState::Painting { last_screen: screen };
                self.apply_brush_at(screen)
            }
            Mode::Move => {
                self.input = InputState::Panning { last_screen: screen };
                Vec::new()
            }
        }
    }

    pub fn on_pointer_move(&mut self, screen: Point) -> Vec<Action> {
        match self.input {
            InputState::Idle => Vec::new(),
            InputState::Panning { last_screen } => {
                self.viewport.pan(screen.x - last_screen.x, screen.y - last_screen.y);
                self.input = InputState::Panning { last_screen: screen };
                vec![Action::RenderNeeded]
            }
            InputState::Painting { .. } => {
                self.input = InputState::Painting { last_screen: screen };
                self.apply_brush_at(screen)
            }
        }
    }

    pub fn on_pointer_up(&mut self, _screen: Point) -> Vec<Action> {
        self.input = InputState::Idle;
        Vec::new()
    }

    pub fn on_wheel(&mut self, screen: Point, delta: WheelDelta) -> Vec<Action> {
        let Some(factor) = self.config.wheel_factor(delta.dy) else {
            return Vec::new();
        };
        self.viewport.zoom_at(screen, factor);
        vec![Action::RenderNeeded]
    }

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        match Shortcut::from_key(key) {
            Some(Shortcut::ToggleMode) => self.toggle_mode(),
            Some(Shortcut::LayerUp) => self.change_layer(1),
            Some(Shortcut::LayerDown) => self.change_layer(-1),
            None => Vec::new(),
        }
    }

    /// Paint or erase the cell under `screen` on the current layer.
    fn apply_brush_at(&mut self, screen: Point) -> Vec<Action> {
        let cell = self.viewport.screen_to_grid(screen);
        let layer = self.ui.layer;
        let action = match self.ui.brush {
            Brush::Block(block) => self
                .grid
                .set_cell(layer, cell.x, cell.y, block)
                .then_some(Action::CellPainted { layer, x: cell.x, y: cell.y, block }),
            Brush::Eraser => self
                .grid
                .erase_cell(layer, cell.x, cell.y)
                .then_some(Action::CellErased { layer, x: cell.x, y: cell.y }),
        };
        match action {
            Some(action) => vec![action, Action::RenderNeeded],
            None => Vec::new(),
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn ui(&self) -> UiState {
        self.ui
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn grid(&self) -> &GridStore {
        &self.grid
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    #[must_use]
    pub fn with_config(canvas: HtmlCanvasElement, config: EditorConfig) -> Self {
        Self { canvas, core: EngineCore::with_config(config) }
    }

    // --- Viewport ---

    /// Update viewport dimensions and device pixel ratio, resizing the backing store.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        self.canvas.set_width((width_css * dpr).round().max(1.0) as u32);
        self.canvas.set_height((height_css * dpr).round().max(1.0) as u32);
    }

    // --- Delegated inputs ---

    pub fn handle_input(&mut self, event: InputEvent) -> Vec<Action> {
        self.core.handle_input(event)
    }

    pub fn load_design(&mut self, grid: GridStore) -> Vec<Action> {
        self.core.load_design(grid)
    }

    pub fn set_brush(&mut self, brush: Brush) -> Vec<Action> {
        self.core.set_brush(brush)
    }

    pub fn change_layer(&mut self, delta: i64) -> Vec<Action> {
        self.core.change_layer(delta)
    }

    pub fn set_ghost_layer(&mut self, enabled: bool) -> Vec<Action> {
        self.core.set_ghost_layer(enabled)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a draw call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self.context()?;
        let core = &self.core;
        render::draw(
            &ctx,
            &core.grid,
            &core.viewport,
            &core.ui,
            &core.config,
            core.viewport_width,
            core.viewport_height,
            core.dpr,
        )
    }

    // --- Export ---

    /// Rasterize what is on screen right now into a one-page PDF.
    ///
    /// # Errors
    ///
    /// [`ExportError::Canvas`] when drawing or pixel capture fails, otherwise
    /// whatever [`export::build_pdf`] reports.
    pub fn export_current_layer(&self) -> Result<Vec<u8>, ExportError> {
        self.render().map_err(|e| canvas_error(&e))?;
        let page = self.capture_page().map_err(|e| canvas_error(&e))?;
        log::info!("exporting layer {}", self.core.ui.layer);
        export::build_pdf(&format!("Blueprint layer {}", self.core.ui.layer), &[page])
    }

    /// Render every non-empty layer as its own page, then restore the normal view.
    ///
    /// # Errors
    ///
    /// [`ExportError::NoContent`] when every layer is empty,
    /// [`ExportError::Canvas`] when drawing or capture fails, otherwise
    /// whatever [`export::build_pdf`] reports.
    pub fn export_all_layers(&self) -> Result<Vec<u8>, ExportError> {
        let layers = export::layers_to_export(&self.core.grid);
        if layers.is_empty() {
            return Err(ExportError::NoContent);
        }
        log::info!("exporting {} layer(s): {layers:?}", layers.len());

        let captured = self.capture_layers(&layers);
        let restored = self.render();
        let pages = captured.map_err(|e| canvas_error(&e))?;
        restored.map_err(|e| canvas_error(&e))?;
        export::build_pdf("Blueprint", &pages)
    }

    fn capture_layers(&self, layers: &[Layer]) -> Result<Vec<PageImage>, JsValue> {
        let ctx = self.context()?;
        let core = &self.core;
        let mut pages = Vec::with_capacity(layers.len());
        for &layer in layers {
            render::draw_export_page(
                &ctx,
                &core.grid,
                &core.viewport,
                &core.config,
                layer,
                core.viewport_width,
                core.viewport_height,
                core.dpr,
            )?;
            pages.push(self.capture_page()?);
        }
        Ok(pages)
    }

    /// Copy the full backing store as RGBA.
    fn capture_page(&self) -> Result<PageImage, JsValue> {
        let ctx = self.context()?;
        let width = self.canvas.width();
        let height = self.canvas.height();
        let data = ctx.get_image_data(0.0, 0.0, f64::from(width), f64::from(height))?;
        Ok(PageImage { width: data.width(), height: data.height(), rgba: data.data().0 })
    }

    fn context(&self) -> Result<CanvasRenderingContext2d, JsValue> {
        self.canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn ui(&self) -> UiState {
        self.core.ui()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.core.viewport()
    }

    #[must_use]
    pub fn grid(&self) -> &GridStore {
        self.core.grid()
    }
}

fn canvas_error(err: &JsValue) -> ExportError {
    ExportError::Canvas(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}
