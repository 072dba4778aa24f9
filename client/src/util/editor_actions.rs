//! Run editor transitions and route the actions they return to the page.
//!
//! Transitions mutate the editor without notifying subscribers. Placed images
//! and the toolbar re-render only when a transition asks for it with
//! `Action::RenderNeeded`.

#[cfg(test)]
#[path = "editor_actions_test.rs"]
mod editor_actions_test;

use leptos::prelude::*;

use canvas::engine::{Action, EditorState};

/// Whether any action asks the view to re-render.
#[must_use]
pub fn needs_render(actions: &[Action]) -> bool {
    actions.iter().any(|a| matches!(a, Action::RenderNeeded))
}

/// Apply one transition to the editor and process its actions.
pub fn dispatch(
    editor: RwSignal<EditorState>,
    transition: impl FnOnce(&mut EditorState) -> Vec<Action>,
) -> Vec<Action> {
    let actions = editor.try_update_untracked(transition).unwrap_or_default();
    process_actions(editor, &actions);
    actions
}

fn process_actions(editor: RwSignal<EditorState>, actions: &[Action]) {
    #[cfg(feature = "hydrate")]
    for action in actions {
        match action {
            Action::FeatureCreated(f) => log::debug!("feature {} placed from {}", f.id, f.source_path),
            Action::FeatureDeleted { id } => log::debug!("feature {id} removed"),
            Action::SelectionChanged(Some(id)) => log::debug!("feature {id} selected"),
            Action::SelectionChanged(None) => log::debug!("selection cleared"),
            Action::FeatureUpdated { .. } | Action::RenderNeeded => {}
        }
    }
    if needs_render(actions) {
        editor.notify();
    }
}
