//! Editor controls: save the composition as PNG and delete the selection.

use leptos::prelude::*;

use canvas::engine::EditorState;

use crate::state::toast::ToastState;
use crate::util::editor_actions::dispatch;

#[component]
pub fn EditorToolbar() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_save = move |_| {
        #[cfg(feature = "hydrate")]
        {
            crate::util::download::save_sketch(editor, toasts);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = toasts;
        }
    };

    let on_delete = move |_| {
        dispatch(editor, EditorState::delete_selected);
    };

    view! {
        <div class="editor-toolbar">
            <button class="btn btn-primary" on:click=on_save title="Save sketch as PNG">
                "Save Sketch"
            </button>
            <Show when=move || editor.with(EditorState::delete_visible)>
                <button class="btn btn-danger" on:click=on_delete title="Delete selected feature">
                    "Delete Feature"
                </button>
            </Show>
        </div>
    }
}
