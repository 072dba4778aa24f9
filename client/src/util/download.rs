//! Sketch export: settle, fetch images, flatten, and hand the PNG to the browser.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use canvas::export::ExportError;

use crate::net::types::ApiError;

/// Why a save did not produce a file.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("could not load {path}: {source}")]
    Fetch { path: String, source: ApiError },
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("could not start download: {0}")]
    Download(String),
}

/// Toast text for a failed save.
#[must_use]
pub fn save_error_message(err: &SaveError) -> String {
    format!("Could not save sketch: {err}")
}

/// Deselect, wait for the page to settle, then export and download the canvas.
///
/// Failures are reported through a toast.
#[cfg(feature = "hydrate")]
pub fn save_sketch(
    editor: leptos::prelude::RwSignal<canvas::engine::EditorState>,
    toasts: leptos::prelude::RwSignal<crate::state::toast::ToastState>,
) {
    use leptos::prelude::*;

    use crate::components::toast::show_toast;
    use crate::state::toast::ToastCategory;

    crate::util::editor_actions::dispatch(editor, canvas::engine::EditorState::begin_export);
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(canvas::consts::EXPORT_SETTLE_MS).await;
        remeasure_canvas(editor);
        let plan = editor.with_untracked(canvas::engine::EditorState::export_plan);
        match export_plan(&plan).await {
            Ok(()) => log::info!("sketch exported ({} layers)", plan.layers.len()),
            Err(e) => {
                log::warn!("sketch export failed: {e}");
                show_toast(toasts, save_error_message(&e), ToastCategory::Error);
            }
        }
    });
}

/// Refresh the editor's viewport from the canvas element so a resize since
/// the last pointer event does not shrink or clip the export.
#[cfg(feature = "hydrate")]
fn remeasure_canvas(editor: leptos::prelude::RwSignal<canvas::engine::EditorState>) {
    use leptos::prelude::*;

    use crate::components::sketch_canvas::CANVAS_ELEMENT_ID;

    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CANVAS_ELEMENT_ID))
    else {
        log::warn!("canvas element #{CANVAS_ELEMENT_ID} not found; exporting with last known size");
        return;
    };
    let viewport = crate::util::canvas_input::measure_viewport(&el);
    editor.update_untracked(|ed| ed.set_viewport(viewport));
}

#[cfg(feature = "hydrate")]
async fn export_plan(plan: &canvas::export::ExportPlan) -> Result<(), SaveError> {
    let mut assets = std::collections::HashMap::new();
    for path in plan.sources() {
        let bytes = crate::net::api::fetch_asset_bytes(path)
            .await
            .map_err(|source| SaveError::Fetch { path: path.to_owned(), source })?;
        assets.insert(path.to_owned(), bytes);
    }
    let uri = canvas::export::export_data_uri(plan, &assets)?;
    trigger_download(&uri, canvas::consts::EXPORT_FILE_NAME)
}

/// Click a temporary anchor to download `href` as `file_name`.
#[cfg(feature = "hydrate")]
fn trigger_download(href: &str, file_name: &str) -> Result<(), SaveError> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| SaveError::Download("no document".into()))?;
    let anchor = document
        .create_element("a")
        .map_err(|e| SaveError::Download(format!("{e:?}")))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| SaveError::Download("anchor element unavailable".into()))?;
    anchor.set_href(href);
    anchor.set_download(file_name);
    anchor.click();
    Ok(())
}
