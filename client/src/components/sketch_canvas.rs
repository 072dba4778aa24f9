//! Bridge component between DOM events and the `canvas::engine::EditorState`.
//!
//! ARCHITECTURE
//! ============
//! The editor state machine lives in the canvas crate and never sees the DOM.
//! This host measures the canvas element before every event, converts the
//! event into editor input, and hands the resulting actions to
//! `util::editor_actions`, which re-renders the placed images when asked.
//!
//! Pointer moves and releases are listened for on the window so a drag keeps
//! tracking when the cursor leaves the canvas.

use leptos::prelude::*;

use canvas::doc::FeatureId;
use canvas::engine::EditorState;

#[cfg(feature = "hydrate")]
use crate::util::editor_actions::dispatch;

#[cfg(feature = "hydrate")]
use canvas::input::Key;
#[cfg(feature = "hydrate")]
use canvas::viewport::Point;

#[cfg(feature = "hydrate")]
use crate::util::canvas_input::{
    client_point, event_in_text_entry, is_editor_key, measure_viewport, should_prevent_wheel, wheel_delta,
};

#[cfg(feature = "hydrate")]
fn sync_viewport(editor: RwSignal<EditorState>, canvas_ref: &NodeRef<leptos::html::Div>) {
    if let Some(el) = canvas_ref.get_untracked() {
        let viewport = measure_viewport(&el);
        editor.update_untracked(|ed| ed.set_viewport(viewport));
    }
}

#[cfg(feature = "hydrate")]
fn pointer_move(editor: RwSignal<EditorState>, canvas_ref: &NodeRef<leptos::html::Div>, point: Point) {
    if !editor.with_untracked(|ed| matches!(ed.input, canvas::input::InputState::Dragging { .. })) {
        return;
    }
    sync_viewport(editor, canvas_ref);
    dispatch(editor, |ed| ed.on_pointer_move(point));
}

/// DOM id of the composition surface, used to re-measure it before export.
pub const CANVAS_ELEMENT_ID: &str = "sketch-canvas";

/// The composition surface.
#[component]
pub fn SketchCanvas() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let canvas_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let move_handle = window_event_listener(leptos::ev::mousemove, move |ev| {
            pointer_move(editor, &canvas_ref, client_point(&ev));
        });
        let up_handle = window_event_listener(leptos::ev::mouseup, move |_ev| {
            if editor.with_untracked(|ed| !matches!(ed.input, canvas::input::InputState::Idle)) {
                dispatch(editor, EditorState::on_pointer_up);
            }
        });
        let key_handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if event_in_text_entry(&ev) {
                return;
            }
            let key = ev.key();
            if !is_editor_key(&key) {
                return;
            }
            let key = Key(key);
            if !dispatch(editor, |ed| ed.on_key_down(&key)).is_empty() {
                ev.prevent_default();
            }
        });
        on_cleanup(move || {
            move_handle.remove();
            up_handle.remove();
            key_handle.remove();
        });
    }

    let on_drag_over = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                if let Some(transfer) = ev.data_transfer() {
                    transfer.set_drop_effect("copy");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::DragEvent| {}
        }
    };

    let on_drop = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                let payload = crate::util::drag::read_payload(&ev);
                sync_viewport(editor, &canvas_ref);
                let point = client_point(&ev);
                dispatch(editor, |ed| ed.on_drop(point, payload.as_ref()));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::DragEvent| {}
        }
    };

    let on_mouse_down = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::MouseEvent| {
                if ev.button() != 0 {
                    return;
                }
                sync_viewport(editor, &canvas_ref);
                let point = client_point(&ev);
                dispatch(editor, |ed| ed.on_pointer_down(point));
                if editor.with_untracked(|ed| ed.selection().is_some()) {
                    ev.prevent_default();
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_wheel = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::WheelEvent| {
                if editor.with_untracked(|ed| ed.selection().is_none()) {
                    return;
                }
                sync_viewport(editor, &canvas_ref);
                let delta = wheel_delta(&ev);
                if should_prevent_wheel(&dispatch(editor, |ed| ed.on_wheel(delta))) {
                    ev.prevent_default();
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::WheelEvent| {}
        }
    };

    let feature_ids = move || editor.with(|ed| ed.doc.iter().map(|f| f.id).collect::<Vec<_>>());

    view! {
        <div
            id=CANVAS_ELEMENT_ID
            class="sketch-canvas"
            node_ref=canvas_ref
            on:dragover=on_drag_over
            on:drop=on_drop
            on:mousedown=on_mouse_down
            on:wheel=on_wheel
        >
            <For each=feature_ids key=|id| *id children=move |id| view! { <PlacedImage id=id/> }/>
        </div>
    }
}

/// One placed feature, positioned absolutely inside the canvas.
#[component]
fn PlacedImage(id: FeatureId) -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();

    let (src, alt) = editor.with_untracked(|ed| {
        ed.feature(&id)
            .map(|f| (crate::net::api::asset_url(&f.source_path), f.alt_text.clone()))
            .unwrap_or_default()
    });
    let style = move || editor.with(|ed| ed.feature(&id).map(canvas::doc::PlacedFeature::css_style).unwrap_or_default());
    let selected = move || editor.with(|ed| ed.is_selected(&id));

    let on_load = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::Event| {
                use wasm_bindgen::JsCast;

                let Some(img) = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok())
                else {
                    return;
                };
                let (w, h) = (f64::from(img.natural_width()), f64::from(img.natural_height()));
                dispatch(editor, |ed| ed.on_image_loaded(&id, w, h));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::Event| {}
        }
    };

    view! {
        <img
            class="placed-feature"
            class:selected=selected
            src=src
            alt=alt
            style=style
            draggable="false"
            on:load=on_load
        />
    }
}
