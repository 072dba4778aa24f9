//! Mapping between DOM events and the editor's input types.

#[cfg(test)]
#[path = "canvas_input_test.rs"]
mod canvas_input_test;

use canvas::engine::Action;

/// Keys the editor consumes; the browser default is suppressed for these.
#[must_use]
pub fn is_editor_key(key: &str) -> bool {
    matches!(key, "Delete" | "Backspace" | "Escape")
}

/// A wheel event should only be swallowed when the editor acted on it.
#[must_use]
pub fn should_prevent_wheel(actions: &[Action]) -> bool {
    actions.iter().any(|a| matches!(a, Action::FeatureUpdated { .. }))
}

/// Whether keyboard focus is inside a text-entry control.
#[must_use]
pub fn is_text_entry_tag(tag_name: &str) -> bool {
    matches!(tag_name.to_ascii_uppercase().as_str(), "INPUT" | "TEXTAREA" | "SELECT")
}

#[cfg(feature = "hydrate")]
pub fn client_point(ev: &leptos::ev::MouseEvent) -> canvas::viewport::Point {
    canvas::viewport::Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

#[cfg(feature = "hydrate")]
pub fn wheel_delta(ev: &leptos::ev::WheelEvent) -> canvas::input::WheelDelta {
    canvas::input::WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() }
}

/// Current page placement of the canvas element.
#[cfg(feature = "hydrate")]
pub fn measure_viewport(el: &web_sys::Element) -> canvas::viewport::Viewport {
    let rect = el.get_bounding_client_rect();
    canvas::viewport::Viewport::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Whether a key event originated in a form control.
#[cfg(feature = "hydrate")]
pub fn event_in_text_entry(ev: &leptos::ev::KeyboardEvent) -> bool {
    use wasm_bindgen::JsCast;

    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .is_some_and(|el| is_text_entry_tag(&el.tag_name()))
}
