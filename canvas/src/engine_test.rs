#![allow(clippy::float_cmp)]

use super::*;
use crate::camera::GridPos;
use crate::grid::WireCells;

// =============================================================
// Helpers
// =============================================================

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn key(s: &str) -> Key {
    Key(s.to_owned())
}

/// Engine with grid origin at the screen origin and 10px cells.
fn core() -> EngineCore {
    let mut core = EngineCore::new();
    core.viewport.scale = 10.0;
    core.set_viewport(800.0, 600.0, 1.0);
    core
}

fn cells(core: &EngineCore, layer: Layer) -> Vec<(i32, i32, BlockKind)> {
    core.grid.layer_entries(layer).collect()
}

fn down(core: &mut EngineCore, x: f64, y: f64) -> Vec<Action> {
    core.handle_input(InputEvent::PointerDown { screen: pt(x, y), button: Button::Primary })
}

fn drag_to(core: &mut EngineCore, x: f64, y: f64) -> Vec<Action> {
    core.handle_input(InputEvent::PointerMove { screen: pt(x, y) })
}

fn up(core: &mut EngineCore, x: f64, y: f64) -> Vec<Action> {
    core.handle_input(InputEvent::PointerUp { screen: pt(x, y) })
}

fn press(core: &mut EngineCore, k: &str) -> Vec<Action> {
    core.handle_input(InputEvent::KeyDown(key(k)))
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_engine_starts_in_edit_mode_on_layer_zero() {
    let core = EngineCore::new();
    assert_eq!(core.ui.mode, Mode::Edit);
    assert_eq!(core.ui.layer, 0);
    assert_eq!(core.ui.brush, Brush::Block(BlockKind::Wall));
    assert!(core.grid.is_empty());
    assert_eq!(core.viewport.scale, 30.0);
    assert!(matches!(core.input, InputState::Idle));
}

#[test]
fn with_config_applies_scale_settings() {
    let config = EditorConfig { initial_scale: 12.0, min_scale: 4.0, max_scale: 50.0, ..EditorConfig::default() };
    let core = EngineCore::with_config(config);
    assert_eq!(core.viewport.scale, 12.0);
    assert_eq!(core.viewport.min_scale, 4.0);
    assert_eq!(core.viewport.max_scale, 50.0);
}

#[test]
fn center_origin_uses_viewport_size() {
    let mut core = EngineCore::new();
    core.set_viewport(1024.0, 768.0, 2.0);
    core.center_origin();
    assert_eq!(core.viewport.offset_x, 512.0);
    assert_eq!(core.viewport.offset_y, 384.0);
    assert_eq!(core.dpr, 2.0);
}

// =============================================================
// Painting
// =============================================================

#[test]
fn pointer_down_in_edit_mode_paints_cell() {
    let mut core = core();
    let actions = down(&mut core, 25.0, 35.0);
    assert_eq!(
        actions,
        vec![Action::CellPainted { layer: 0, x: 2, y: 3, block: BlockKind::Wall }, Action::RenderNeeded]
    );
    assert_eq!(cells(&core, 0), vec![(2, 3, BlockKind::Wall)]);
    assert!(matches!(core.input, InputState::Painting { .. }));
}

#[test]
fn paint_then_erase_scenario() {
    let mut core = core();
    down(&mut core, 25.0, 35.0);
    up(&mut core, 25.0, 35.0);
    core.set_brush(Brush::Eraser);
    let actions = down(&mut core, 25.0, 35.0);
    assert_eq!(actions, vec![Action::CellErased { layer: 0, x: 2, y: 3 }, Action::RenderNeeded]);
    assert!(cells(&core, 0).is_empty());
}

#[test]
fn erasing_empty_cell_emits_nothing() {
    let mut core = core();
    core.set_brush(Brush::Eraser);
    assert!(down(&mut core, 5.0, 5.0).is_empty());
    assert!(matches!(core.input, InputState::Painting { .. }));
}

#[test]
fn drag_paints_a_stroke() {
    let mut core = core();
    core.set_brush(Brush::Block(BlockKind::Floor));
    down(&mut core, 5.0, 5.0);
    drag_to(&mut core, 15.0, 5.0);
    drag_to(&mut core, 25.0, 5.0);
    up(&mut core, 25.0, 5.0);
    assert_eq!(
        cells(&core, 0),
        vec![(0, 0, BlockKind::Floor), (1, 0, BlockKind::Floor), (2, 0, BlockKind::Floor)]
    );
}

#[test]
fn revisiting_cell_during_drag_is_idempotent() {
    let mut core = core();
    down(&mut core, 5.0, 5.0);
    assert!(drag_to(&mut core, 6.0, 7.0).is_empty());
    assert!(drag_to(&mut core, 9.0, 9.0).is_empty());
    assert_eq!(core.grid.cell_count(), 1);
}

#[test]
fn move_without_drag_does_nothing() {
    let mut core = core();
    assert!(drag_to(&mut core, 50.0, 50.0).is_empty());
    assert!(core.grid.is_empty());
}

#[test]
fn move_after_pointer_up_does_nothing() {
    let mut core = core();
    down(&mut core, 5.0, 5.0);
    up(&mut core, 5.0, 5.0);
    assert!(drag_to(&mut core, 55.0, 5.0).is_empty());
    assert_eq!(core.grid.cell_count(), 1);
    assert!(matches!(core.input, InputState::Idle));
}

#[test]
fn non_primary_buttons_are_ignored() {
    let mut core = core();
    for button in [Button::Middle, Button::Secondary] {
        let actions = core.handle_input(InputEvent::PointerDown { screen: pt(5.0, 5.0), button });
        assert!(actions.is_empty());
    }
    assert!(core.grid.is_empty());
    assert!(matches!(core.input, InputState::Idle));
}

#[test]
fn paint_goes_to_current_layer() {
    let mut core = core();
    core.change_layer(2);
    down(&mut core, 5.0, 5.0);
    assert!(cells(&core, 0).is_empty());
    assert_eq!(cells(&core, 2), vec![(0, 0, BlockKind::Wall)]);
}

#[test]
fn painted_cell_matches_screen_point_after_pan_and_zoom() {
    let mut core = core();
    core.viewport.pan(137.0, -42.0);
    core.viewport.zoom_at(pt(300.0, 200.0), 1.1);
    let p = pt(412.0, 318.0);
    down(&mut core, p.x, p.y);
    let (x, y, _) = cells(&core, 0)[0];
    let corner = core.viewport.grid_to_screen(GridPos::new(x, y));
    assert!(corner.x <= p.x && p.x < corner.x + core.viewport.scale);
    assert!(corner.y <= p.y && p.y < corner.y + core.viewport.scale);
}

// =============================================================
// Move mode / panning
// =============================================================

#[test]
fn move_mode_drag_pans_viewport() {
    let mut core = core();
    press(&mut core, "m");
    assert!(down(&mut core, 100.0, 100.0).is_empty());
    let actions = drag_to(&mut core, 130.0, 90.0);
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert_eq!(core.viewport.offset_x, 30.0);
    assert_eq!(core.viewport.offset_y, -10.0);
    drag_to(&mut core, 140.0, 95.0);
    assert_eq!(core.viewport.offset_x, 40.0);
    assert_eq!(core.viewport.offset_y, -5.0);
    assert!(core.grid.is_empty());
}

#[test]
fn move_mode_pointer_down_does_not_paint() {
    let mut core = core();
    core.toggle_mode();
    down(&mut core, 5.0, 5.0);
    assert!(core.grid.is_empty());
    assert!(matches!(core.input, InputState::Panning { .. }));
}

#[test]
fn toggle_mode_emits_mode_and_cursor() {
    let mut core = core();
    assert_eq!(press(&mut core, "m"), vec![Action::ModeChanged(Mode::Move), Action::SetCursor("move".to_owned())]);
    assert_eq!(press(&mut core, "M"), vec![Action::ModeChanged(Mode::Edit), Action::SetCursor("crosshair".to_owned())]);
}

#[test]
fn toggle_mode_mid_drag_ends_gesture() {
    let mut core = core();
    down(&mut core, 5.0, 5.0);
    core.toggle_mode();
    assert!(matches!(core.input, InputState::Idle));
    assert!(drag_to(&mut core, 55.0, 5.0).is_empty());
}

// =============================================================
// Wheel
// =============================================================

#[test]
fn wheel_down_zooms_out_around_pointer() {
    let mut core = core();
    core.viewport.offset_x = 100.0;
    core.viewport.offset_y = 100.0;
    let anchor = pt(250.0, 175.0);
    let before = core.viewport.screen_to_grid_f(anchor);
    let actions = core.handle_input(InputEvent::Wheel { screen: anchor, delta: WheelDelta { dx: 0.0, dy: 100.0 } });
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert!((core.viewport.scale - 9.0).abs() < 1e-9);
    let after = core.viewport.screen_to_grid_f(anchor);
    assert!((before.x - after.x).abs() < 1e-9);
    assert!((before.y - after.y).abs() < 1e-9);
}

#[test]
fn wheel_up_zooms_in() {
    let mut core = core();
    core.handle_input(InputEvent::Wheel { screen: pt(0.0, 0.0), delta: WheelDelta { dx: 0.0, dy: -3.0 } });
    assert!((core.viewport.scale - 11.0).abs() < 1e-9);
}

#[test]
fn horizontal_wheel_leaves_zoom_alone() {
    let mut core = core();
    let actions = core.handle_input(InputEvent::Wheel { screen: pt(40.0, 40.0), delta: WheelDelta { dx: 30.0, dy: 0.0 } });
    assert!(actions.is_empty());
    assert!((core.viewport.scale - 10.0).abs() < 1e-9);
}

// =============================================================
// Layers
// =============================================================

#[test]
fn e_and_q_change_layer() {
    let mut core = core();
    assert_eq!(press(&mut core, "e"), vec![Action::LayerChanged(1), Action::RenderNeeded]);
    press(&mut core, "E");
    assert_eq!(core.ui.layer, 2);
    assert_eq!(press(&mut core, "q"), vec![Action::LayerChanged(1), Action::RenderNeeded]);
    assert_eq!(core.ui.layer, 1);
}

#[test]
fn layer_never_goes_below_zero() {
    let mut core = core();
    for _ in 0..10 {
        press(&mut core, "q");
    }
    assert_eq!(core.ui.layer, 0);
    assert!(press(&mut core, "q").is_empty());
    assert!(core.change_layer(-1000).is_empty());
    assert_eq!(core.ui.layer, 0);
}

#[test]
fn change_layer_saturates_at_max() {
    let mut core = core();
    core.set_layer(Layer::MAX - 1);
    core.change_layer(5);
    assert_eq!(core.ui.layer, Layer::MAX);
}

#[test]
fn unbound_key_does_nothing() {
    let mut core = core();
    assert!(press(&mut core, "x").is_empty());
    assert_eq!(core.ui.layer, 0);
    assert_eq!(core.ui.mode, Mode::Edit);
}

#[test]
fn ghost_layer_toggle_requests_render_once() {
    let mut core = core();
    assert_eq!(core.set_ghost_layer(true), vec![Action::RenderNeeded]);
    assert!(core.set_ghost_layer(true).is_empty());
    assert!(core.ui.ghost_layer);
}

// =============================================================
// Brush
// =============================================================

#[test]
fn set_brush_reports_change() {
    let mut core = core();
    assert_eq!(
        core.set_brush(Brush::Block(BlockKind::Ladder)),
        vec![Action::BrushChanged(Brush::Block(BlockKind::Ladder))]
    );
    assert_eq!(core.ui.brush, Brush::Block(BlockKind::Ladder));
}

// =============================================================
// Loading designs
// =============================================================

#[test]
fn load_design_replaces_grid_and_resets_layer() {
    let mut core = core();
    down(&mut core, 5.0, 5.0);
    core.change_layer(3);
    let wire: WireCells = serde_json::from_str(r#"{"0":{"1":{"2":"floor"}}}"#).unwrap();
    let actions = core.load_design(GridStore::from_wire(&wire).unwrap());
    assert_eq!(actions, vec![Action::LayerChanged(0), Action::RenderNeeded]);
    assert_eq!(core.ui.layer, 0);
    assert_eq!(cells(&core, 0), vec![(1, 2, BlockKind::Floor)]);
    assert_eq!(core.grid.cell_count(), 1);
}

#[test]
fn load_design_ends_drag() {
    let mut core = core();
    down(&mut core, 5.0, 5.0);
    core.load_design(GridStore::new());
    assert!(drag_to(&mut core, 25.0, 5.0).is_empty());
    assert!(core.grid.is_empty());
}

#[test]
fn later_load_wins() {
    let mut core = core();
    let mut first = GridStore::new();
    first.set_cell(0, 0, 0, BlockKind::Wall);
    let mut second = GridStore::new();
    second.set_cell(1, 5, 5, BlockKind::Roof);
    core.load_design(first);
    core.load_design(second.clone());
    assert_eq!(core.grid, second);
}
