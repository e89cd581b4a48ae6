//! Input model: editor mode, mouse buttons, keys, and the gesture state machine.
//!
//! `Mode` decides what a drag does (paint cells or pan the viewport).
//! `UiState` is the persistent editor chrome state the renderer reads.
//! `InputState` is the active gesture tracked between pointer-down and
//! pointer-up. `InputEvent` is the single entry type accepted by
//! [`crate::engine::EngineCore::handle_input`].

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::block::Brush;
use crate::camera::Point;
use crate::grid::Layer;

/// What pointer drags do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Drags paint (or erase) cells.
    #[default]
    Edit,
    /// Drags pan the viewport.
    Move,
}

impl Mode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Edit => Self::Move,
            Self::Move => Self::Edit,
        }
    }

    /// CSS cursor shown over the canvas in this mode.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::Edit => "crosshair",
            Self::Move => "move",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Edit => "Edit",
            Self::Move => "Move",
        }
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key as reported by the browser (`KeyboardEvent.key`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Editor commands bound to single keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// `m`: flip between edit and move mode.
    ToggleMode,
    /// `e`: go up one layer.
    LayerUp,
    /// `q`: go down one layer (never below 0).
    LayerDown,
}

impl Shortcut {
    /// Map a key to its shortcut, ignoring case.
    #[must_use]
    pub fn from_key(key: &Key) -> Option<Self> {
        match key.0.to_lowercase().as_str() {
            "m" => Some(Self::ToggleMode),
            "e" => Some(Self::LayerUp),
            "q" => Some(Self::LayerDown),
            _ => None,
        }
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiState {
    pub mode: Mode,
    /// Block kind (or eraser) applied by paint actions.
    pub brush: Brush,
    /// Layer being edited and drawn at full opacity.
    pub layer: Layer,
    /// Draw `layer - 1` faintly beneath the current layer.
    pub ghost_layer: bool,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Edit-mode drag: every visited cell receives the brush.
    Painting {
        /// Screen-space position of the previous pointer event.
        last_screen: Point,
    },
    /// Move-mode drag: pointer deltas pan the viewport.
    Panning {
        /// Screen-space position of the previous pointer event, used to compute pan delta.
        last_screen: Point,
    },
}

impl InputState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// A raw host event routed through [`crate::engine::EngineCore::handle_input`].
#[derive(Debug, Clone)]
pub enum InputEvent {
    PointerDown { screen: Point, button: Button },
    PointerMove { screen: Point },
    PointerUp { screen: Point },
    Wheel { screen: Point, delta: WheelDelta },
    KeyDown(Key),
}
