//! DOM event mapping for the floorplan canvas.

#[cfg(feature = "csr")]
use leptos::prelude::*;

#[cfg(feature = "csr")]
use floorplan::camera::Point;
#[cfg(feature = "csr")]
use floorplan::engine::Engine;
use floorplan::input::Button;
#[cfg(feature = "csr")]
use floorplan::input::WheelDelta;

#[cfg(test)]
#[path = "map_input_test.rs"]
mod map_input_test;

/// Map `MouseEvent.button` to an engine button. Back, forward and any other
/// auxiliary buttons map to `None` and never reach the engine.
pub fn map_button(button: i16) -> Option<Button> {
    match button {
        0 => Some(Button::Primary),
        1 => Some(Button::Middle),
        2 => Some(Button::Secondary),
        _ => None,
    }
}

#[cfg(feature = "csr")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

#[cfg(feature = "csr")]
pub fn wheel_point(ev: &leptos::ev::WheelEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

#[cfg(feature = "csr")]
pub fn wheel_delta(ev: &leptos::ev::WheelEvent) -> WheelDelta {
    WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() }
}

/// Read the canvas element's CSS size and device pixel ratio, then push them to the engine.
///
/// Called before every render so a resized window is picked up without a
/// dedicated resize listener.
#[cfg(feature = "csr")]
pub fn sync_viewport(engine: &mut Engine, canvas_ref: &NodeRef<leptos::html::Canvas>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(canvas) = canvas_ref.get_untracked() else {
        return;
    };
    let width = f64::from(canvas.client_width()).max(1.0);
    let height = f64::from(canvas.client_height()).max(1.0);
    let dpr = window.device_pixel_ratio().max(1.0);
    engine.set_viewport(width, height, dpr);
}
