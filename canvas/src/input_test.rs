use super::*;
use crate::block::BlockKind;

fn key(s: &str) -> Key {
    Key(s.to_owned())
}

// =============================================================
// Mode
// =============================================================

#[test]
fn mode_default_is_edit() {
    assert_eq!(Mode::default(), Mode::Edit);
}

#[test]
fn mode_toggle_round_trips() {
    assert_eq!(Mode::Edit.toggled(), Mode::Move);
    assert_eq!(Mode::Move.toggled(), Mode::Edit);
    assert_eq!(Mode::Edit.toggled().toggled(), Mode::Edit);
}

#[test]
fn mode_cursor_affordance() {
    assert_eq!(Mode::Edit.cursor(), "crosshair");
    assert_eq!(Mode::Move.cursor(), "move");
}

#[test]
fn mode_labels() {
    assert_eq!(Mode::Edit.label(), "Edit");
    assert_eq!(Mode::Move.label(), "Move");
}

// =============================================================
// Shortcut
// =============================================================

#[test]
fn shortcut_lowercase_keys() {
    assert_eq!(Shortcut::from_key(&key("m")), Some(Shortcut::ToggleMode));
    assert_eq!(Shortcut::from_key(&key("e")), Some(Shortcut::LayerUp));
    assert_eq!(Shortcut::from_key(&key("q")), Some(Shortcut::LayerDown));
}

#[test]
fn shortcut_ignores_case() {
    assert_eq!(Shortcut::from_key(&key("M")), Some(Shortcut::ToggleMode));
    assert_eq!(Shortcut::from_key(&key("E")), Some(Shortcut::LayerUp));
    assert_eq!(Shortcut::from_key(&key("Q")), Some(Shortcut::LayerDown));
}

#[test]
fn shortcut_unbound_keys() {
    for k in ["a", "Escape", "Enter", "mm", ""] {
        assert_eq!(Shortcut::from_key(&key(k)), None, "{k}");
    }
}

// =============================================================
// UiState / InputState
// =============================================================

#[test]
fn ui_state_defaults() {
    let ui = UiState::default();
    assert_eq!(ui.mode, Mode::Edit);
    assert_eq!(ui.brush, Brush::Block(BlockKind::Wall));
    assert_eq!(ui.layer, 0);
    assert!(!ui.ghost_layer);
}

#[test]
fn input_state_default_is_idle() {
    assert!(matches!(InputState::default(), InputState::Idle));
    assert!(!InputState::default().is_dragging());
}

#[test]
fn painting_and_panning_count_as_dragging() {
    let p = Point::new(1.0, 2.0);
    assert!(InputState::Painting { last_screen: p }.is_dragging());
    assert!(InputState::Panning { last_screen: p }.is_dragging());
}

#[test]
fn key_equality() {
    assert_eq!(key("m"), key("m"));
    assert_ne!(key("m"), key("M"));
}
