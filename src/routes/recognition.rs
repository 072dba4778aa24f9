//! Recognition gateway routes: multipart in, backend reply out.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::services::recognition::{
    self, BackendReply, CallKind, Credentials, FormFields, RecognitionError, SessionReply, SessionRequest, Upload,
};
use crate::state::AppState;

/// Largest accepted multipart body.
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// `POST /api/recognize`: whole-face sketch search.
pub async fn recognize(State(state): State<AppState>, headers: HeaderMap, multipart: Multipart) -> Response {
    let credentials = credentials_from(&headers);
    match read_form(CallKind::Recognize, multipart).await {
        Ok(fields) => relay(&state, CallKind::Recognize, fields, &credentials).await,
        Err(response) => response,
    }
}

/// `POST /api/recognize_component`: single-component sketch search.
///
/// `part` may also arrive in the query string; a non-empty form value wins.
pub async fn recognize_component(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Response {
    let credentials = credentials_from(&headers);
    let kind = CallKind::RecognizeComponent;
    match read_form(kind, multipart).await {
        Ok(mut fields) => {
            if let Some(part) = query.get("part") {
                fields.fill_text("part", part.as_str());
            }
            relay(&state, kind, fields, &credentials).await
        }
        Err(response) => response,
    }
}

/// `POST /api/add_person`: enroll a person with a reference photo.
pub async fn add_person(State(state): State<AppState>, headers: HeaderMap, multipart: Multipart) -> Response {
    let credentials = credentials_from(&headers);
    match read_form(CallKind::AddPerson, multipart).await {
        Ok(fields) => relay(&state, CallKind::AddPerson, fields, &credentials).await,
        Err(response) => response,
    }
}

/// `GET /data/photos/{filename}`: enrolled photo, proxied from the backend.
pub async fn photo(State(state): State<AppState>, Path(filename): Path<String>, headers: HeaderMap) -> Response {
    match state.backend.photo(&filename, &credentials_from(&headers)).await {
        Ok(reply) => {
            let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
            let content_type = reply
                .content_type
                .unwrap_or_else(|| "application/octet-stream".to_owned());
            (status, [(CONTENT_TYPE, content_type)], reply.bytes).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, %filename, "recognition: photo fetch failed");
            error_response(&e).into_response()
        }
    }
}

/// `GET|POST /login`, `GET /logout`: passed through to the backend, which owns sign-in.
pub async fn session(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path_and_query = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_owned(), ToString::to_string);
    let request = SessionRequest {
        method,
        path_and_query,
        content_type: header_text(&headers, &CONTENT_TYPE),
        body: body.to_vec(),
        credentials: credentials_from(&headers),
    };
    match state.backend.session(request).await {
        Ok(reply) => session_response(reply),
        Err(e) => {
            tracing::warn!(error = %e, path = uri.path(), "recognition: session passthrough failed");
            error_response(&e).into_response()
        }
    }
}

async fn relay(state: &AppState, kind: CallKind, fields: FormFields, credentials: &Credentials) -> Response {
    match recognition::submit(state.backend.as_ref(), kind, fields, credentials).await {
        Ok(reply) => reply_response(reply),
        Err(e) => error_response(&e).into_response(),
    }
}

/// Collect file and text parts. Parts without a name are skipped.
async fn read_form(kind: CallKind, mut multipart: Multipart) -> Result<FormFields, Response> {
    let unreadable = |message: String| {
        tracing::warn!(endpoint = kind.endpoint(), %message, "recognition: unreadable multipart body");
        (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
    };
    let mut fields = FormFields::new();
    while let Some(field) = multipart.next_field().await.map_err(|e| unreadable(e.body_text()))? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        if let Some(file_name) = field.file_name().map(str::to_owned) {
            let bytes = field.bytes().await.map_err(|e| unreadable(e.body_text()))?;
            fields.insert_file(name, Upload { file_name, bytes: bytes.to_vec() });
        } else {
            let value = field.text().await.map_err(|e| unreadable(e.body_text()))?;
            fields.insert_text(name, value);
        }
    }
    Ok(fields)
}

fn header_text(headers: &HeaderMap, name: &axum::http::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

/// The browser's `Cookie` and `Authorization` headers.
#[must_use]
pub fn credentials_from(headers: &HeaderMap) -> Credentials {
    Credentials { cookie: header_text(headers, &COOKIE), authorization: header_text(headers, &AUTHORIZATION) }
}

/// Append `Set-Cookie` headers the backend issued. Values that are not valid header text are dropped.
fn append_cookies(response: &mut Response, cookies: &[String]) {
    for cookie in cookies {
        match HeaderValue::from_str(cookie) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => tracing::warn!(error = %e, "recognition: dropped malformed set-cookie"),
        }
    }
}

/// Relay the backend's status, body, and cookies unchanged.
#[must_use]
pub fn reply_response(reply: BackendReply) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut response = (status, Json(reply.body)).into_response();
    append_cookies(&mut response, &reply.set_cookies);
    response
}

/// Relay a sign-in page reply: status, redirect target, content type, cookies, body.
#[must_use]
pub fn session_response(reply: SessionReply) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut response = (status, reply.body).into_response();
    let headers = response.headers_mut();
    for (name, value) in [(LOCATION, reply.location), (CONTENT_TYPE, reply.content_type)] {
        if let Some(value) = value.and_then(|v| HeaderValue::from_str(&v).ok()) {
            headers.insert(name, value);
        }
    }
    append_cookies(&mut response, &reply.set_cookies);
    response
}

/// Map a gateway error to a status and `{ error }` body.
#[must_use]
pub fn error_response(err: &RecognitionError) -> (StatusCode, Json<serde_json::Value>) {
    let status = match err {
        RecognitionError::Validation(_) => StatusCode::BAD_REQUEST,
        RecognitionError::SignInRequired => StatusCode::UNAUTHORIZED,
        RecognitionError::Unavailable(_) | RecognitionError::InvalidReply(_) => StatusCode::BAD_GATEWAY,
        RecognitionError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": err.to_string() })))
}

#[cfg(test)]
#[path = "recognition_test.rs"]
mod tests;
