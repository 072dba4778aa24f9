use serde_json::json;

use super::*;
use crate::services::recognition::{INVALID_FILE, NO_SKETCH};

// =============================================================================
// error_response
// =============================================================================

#[test]
fn validation_errors_are_bad_request_with_message() {
    let (status, Json(body)) = error_response(&RecognitionError::Validation(NO_SKETCH));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "No sketch file provided" }));
}

#[test]
fn backend_failures_are_bad_gateway() {
    let (status, Json(body)) = error_response(&RecognitionError::Unavailable("connection refused".into()));
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "recognition backend unavailable: connection refused");

    let (status, _) = error_response(&RecognitionError::InvalidReply("expected value".into()));
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[test]
fn sign_in_required_is_unauthorized() {
    let (status, Json(body)) = error_response(&RecognitionError::SignInRequired);
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Please sign in to continue." }));
}

#[test]
fn client_build_failure_is_internal_error() {
    let (status, _) = error_response(&RecognitionError::HttpClientBuild("tls".into()));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// reply_response / session_response
// =============================================================================

#[test]
fn reply_status_is_relayed() {
    let reply = BackendReply { status: 400, body: json!({ "error": INVALID_FILE }), set_cookies: vec![] };
    let response = reply_response(reply);
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().get(SET_COOKIE).is_none());
}

#[test]
fn out_of_range_status_becomes_bad_gateway() {
    let reply = BackendReply { status: 42, body: json!({}), set_cookies: vec![] };
    assert_eq!(reply_response(reply).status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn reply_carries_backend_cookies() {
    let reply = BackendReply {
        status: 200,
        body: json!({ "match": false }),
        set_cookies: vec!["session=abc; HttpOnly; Path=/".into(), "remember=1; Path=/".into()],
    };
    let response = reply_response(reply);
    let cookies: Vec<_> = response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_owned())
        .collect();
    assert_eq!(cookies, ["session=abc; HttpOnly; Path=/", "remember=1; Path=/"]);
}

#[test]
fn malformed_cookie_is_dropped() {
    let reply = BackendReply { status: 200, body: json!({}), set_cookies: vec!["bad\nvalue".into()] };
    assert!(reply_response(reply).headers().get(SET_COOKIE).is_none());
}

#[test]
fn session_redirect_keeps_location_and_cookie() {
    let reply = SessionReply {
        status: 302,
        location: Some("/".into()),
        content_type: Some("text/html; charset=utf-8".into()),
        set_cookies: vec!["session=abc; HttpOnly; Path=/".into()],
        body: b"<a href=\"/\">/</a>".to_vec(),
    };
    let response = session_response(reply);
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[LOCATION], "/");
    assert_eq!(response.headers()[CONTENT_TYPE], "text/html; charset=utf-8");
    assert_eq!(response.headers()[SET_COOKIE], "session=abc; HttpOnly; Path=/");
}

#[test]
fn session_page_without_redirect_has_no_location() {
    let reply = SessionReply { status: 200, body: b"<form></form>".to_vec(), ..Default::default() };
    let response = session_response(reply);
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(LOCATION).is_none());
}

// =============================================================================
// credentials_from
// =============================================================================

#[test]
fn credentials_come_from_cookie_and_authorization() {
    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, HeaderValue::from_static("session=abc"));
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic YWRtaW46cHc="));
    let creds = credentials_from(&headers);
    assert_eq!(creds.cookie.as_deref(), Some("session=abc"));
    assert_eq!(creds.authorization.as_deref(), Some("Basic YWRtaW46cHc="));
}

#[test]
fn missing_headers_give_empty_credentials() {
    assert_eq!(credentials_from(&HeaderMap::new()), Credentials::default());
}
