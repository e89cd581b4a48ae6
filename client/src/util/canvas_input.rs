//! DOM event to engine input mapping.

#[cfg(test)]
#[path = "canvas_input_test.rs"]
mod canvas_input_test;

use canvas::input::{Button, Key, Shortcut};

#[cfg(feature = "csr")]
use canvas::camera::Point;

/// Map `MouseEvent.button` to the engine's button.
pub fn map_button(button: i16) -> Button {
    match button {
        1 => Button::Middle,
        2 => Button::Secondary,
        _ => Button::Primary,
    }
}

/// Editor shortcuts swallow the key so the page does not also react to it.
pub fn should_prevent_default_key(key: &str) -> bool {
    Shortcut::from_key(&Key(key.to_owned())).is_some()
}

#[cfg(feature = "csr")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

#[cfg(feature = "csr")]
pub fn wheel_point(ev: &leptos::ev::WheelEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}
