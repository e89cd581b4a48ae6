//! Editor chrome state and the command queue into the canvas host.
//!
//! DESIGN
//! ======
//! `EditorUi` mirrors the engine's mode/brush/layer so the toolbar and palette
//! can render without touching the engine. Controls never mutate the mirror
//! directly: they push an `EditorCommand`, the canvas host applies it to the
//! engine, and the resulting `Action`s flow back into the mirror.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use canvas::block::Brush;
use canvas::engine::Action;
use canvas::grid::{GridStore, Layer};
use canvas::input::Mode;

/// Presentation mirror of the engine's editor state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorUi {
    pub mode: Mode,
    pub brush: Brush,
    pub layer: Layer,
    pub ghost_layer: bool,
    pub cursor: String,
}

impl Default for EditorUi {
    fn default() -> Self {
        let mode = Mode::default();
        Self { mode, brush: Brush::default(), layer: 0, ghost_layer: false, cursor: mode.cursor().to_owned() }
    }
}

impl EditorUi {
    /// Fold one engine action into the mirror. Returns whether anything changed.
    pub fn apply(&mut self, action: &Action) -> bool {
        match action {
            Action::ModeChanged(mode) => replace(&mut self.mode, *mode),
            Action::LayerChanged(layer) => replace(&mut self.layer, *layer),
            Action::BrushChanged(brush) => replace(&mut self.brush, *brush),
            Action::SetCursor(cursor) => replace(&mut self.cursor, cursor.clone()),
            Action::CellPainted { .. } | Action::CellErased { .. } | Action::RenderNeeded => false,
        }
    }

    #[must_use]
    pub fn mode_label(&self) -> &'static str {
        self.mode.label()
    }

    #[must_use]
    pub fn brush_label(&self) -> &'static str {
        self.brush.label()
    }

    #[must_use]
    pub fn brush_color(&self) -> &'static str {
        self.brush.indicator_color()
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// A request from page chrome to the canvas host.
#[derive(Clone, Debug, PartialEq)]
pub enum EditorCommand {
    SetBrush(Brush),
    SetGhostLayer(bool),
    /// Replace the grid with a loaded design.
    LoadDesign(GridStore),
    ExportCurrentLayer,
    ExportAllLayers,
}

impl EditorCommand {
    /// Whether the canvas should take keyboard focus back after this command,
    /// so m/e/q keep working after a click on page chrome.
    #[must_use]
    pub fn refocuses_canvas(&self) -> bool {
        matches!(self, Self::SetBrush(_) | Self::SetGhostLayer(_) | Self::LoadDesign(_))
    }
}

/// FIFO of pending commands; the canvas host drains it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditorCommands {
    pending: Vec<EditorCommand>,
}

impl EditorCommands {
    pub fn push(&mut self, command: EditorCommand) {
        self.pending.push(command);
    }

    /// Take every pending command in submission order.
    pub fn drain(&mut self) -> Vec<EditorCommand> {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
