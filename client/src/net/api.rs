//! REST helpers for the catalog, feature images, recognition, and add-person.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser. Form uploads take browser
//! types and exist only under `hydrate`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use canvas::catalog::Catalog;

#[cfg(feature = "hydrate")]
use super::types::{RecognitionReply, parse_add_person_reply, parse_recognition_reply};
use super::types::ApiError;

pub const CATALOG_ENDPOINT: &str = "/api/catalog";
pub const RECOGNIZE_ENDPOINT: &str = "/api/recognize";
pub const RECOGNIZE_COMPONENT_ENDPOINT: &str = "/api/recognize_component";
pub const ADD_PERSON_ENDPOINT: &str = "/api/add_person";

/// Absolute URL path for a catalog image path such as `static/assets/eyes/01.png`.
#[must_use]
pub fn asset_url(path: &str) -> String {
    if path.starts_with('/') || path.starts_with("http://") || path.starts_with("https://") {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}

/// Fetch the feature catalog from `/api/catalog`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a valid catalog.
pub async fn fetch_catalog() -> Result<Catalog, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CATALOG_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Server(request_failed_message("catalog", resp.status())));
        }
        let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Catalog::from_json(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the raw bytes of a feature image.
///
/// # Errors
///
/// Returns an error if the request fails or the server answers non-2xx.
pub async fn fetch_asset_bytes(path: &str) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&asset_url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Server(request_failed_message(path, resp.status())));
        }
        resp.binary().await.map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
fn js_error(err: &wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// POST a multipart form and return the success flag with the body text.
#[cfg(feature = "hydrate")]
async fn post_form(url: &str, form: web_sys::FormData) -> Result<(bool, String), ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let ok = resp.ok();
    let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    Ok((ok, text))
}

#[cfg(feature = "hydrate")]
fn sketch_form(sketch: &web_sys::File) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new().map_err(|e| js_error(&e))?;
    form.append_with_blob_and_filename("sketch", sketch, &sketch.name())
        .map_err(|e| js_error(&e))?;
    Ok(form)
}

/// Submit a whole-face sketch to `/api/recognize`.
///
/// # Errors
///
/// Returns the server's `error` message, or a network/decode error.
#[cfg(feature = "hydrate")]
pub async fn recognize(sketch: &web_sys::File) -> Result<RecognitionReply, ApiError> {
    let form = sketch_form(sketch)?;
    let (ok, body) = post_form(RECOGNIZE_ENDPOINT, form).await?;
    parse_recognition_reply(ok, &body)
}

/// Submit a single-component sketch to `/api/recognize_component`.
///
/// # Errors
///
/// Returns the server's `error` message, or a network/decode error.
#[cfg(feature = "hydrate")]
pub async fn recognize_component(sketch: &web_sys::File, part: &str) -> Result<RecognitionReply, ApiError> {
    let form = sketch_form(sketch)?;
    form.append_with_str("part", part).map_err(|e| js_error(&e))?;
    let (ok, body) = post_form(RECOGNIZE_COMPONENT_ENDPOINT, form).await?;
    parse_recognition_reply(ok, &body)
}

/// Submit the add-person form (`name`, `age`, `record`, `photo`) as-is.
///
/// # Errors
///
/// Returns the server's `error` message, or a network error.
#[cfg(feature = "hydrate")]
pub async fn add_person(form: &web_sys::HtmlFormElement) -> Result<String, ApiError> {
    let data = web_sys::FormData::new_with_form(form).map_err(|e| js_error(&e))?;
    let (ok, body) = post_form(ADD_PERSON_ENDPOINT, data).await?;
    parse_add_person_reply(ok, &body)
}
