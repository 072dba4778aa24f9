//! Recognition gateway: validate uploads and relay them to the recognition backend.
//!
//! DESIGN
//! ======
//! The host server does no image analysis itself. Each API call is parsed into
//! a `BackendCall` (which is where validation happens), forwarded as a
//! multipart POST, and the backend's status and JSON body are relayed back
//! unchanged. Validation failures never reach the backend.
//!
//! `RecognitionBackend` is the seam between routes and the HTTP client so the
//! relay can be exercised against an in-memory backend in tests.
//!
//! AUTH
//! ====
//! Sign-in belongs to the backend. The gateway keeps no users or sessions: it
//! forwards the browser's `Cookie` and `Authorization` headers, relays any
//! `Set-Cookie` the backend issues, and passes `/login` and `/logout` through
//! so the session cookie lands on this origin. Redirects are never followed;
//! a redirect or 401 on an API call becomes [`RecognitionError::SignInRequired`].

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;

use crate::config::ServerConfig;

pub const ALLOWED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

pub const NO_SKETCH: &str = "No sketch file provided";
pub const INVALID_FILE: &str = "Invalid file";
pub const INVALID_PART: &str = "Invalid or missing part type. Use 'eyes', 'nose' or 'mouth'.";
pub const NO_PHOTO: &str = "No photo file provided";
pub const MISSING_PERSON_DATA: &str = "Missing data or invalid file type";
pub const SIGN_IN_REQUIRED: &str = "Please sign in to continue.";

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    /// The upload was rejected before contacting the backend.
    #[error("{0}")]
    Validation(&'static str),

    /// The backend could not be reached or the transfer failed.
    #[error("recognition backend unavailable: {0}")]
    Unavailable(String),

    /// The backend answered with something other than JSON.
    #[error("recognition backend returned an invalid reply: {0}")]
    InvalidReply(String),

    /// The backend refused the call until the user signs in.
    #[error("{SIGN_IN_REQUIRED}")]
    SignInRequired,

    /// The HTTP client could not be constructed.
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// UPLOADS
// =============================================================================

/// Whether a file name carries one of the accepted image extensions.
#[must_use]
pub fn allowed_file(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// One file part from an incoming multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Fields collected from an incoming multipart form. The first value of a name wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    files: HashMap<String, Upload>,
    text: HashMap<String, String>,
}

impl FormFields {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_file(&mut self, name: impl Into<String>, upload: Upload) {
        self.files.entry(name.into()).or_insert(upload);
    }

    pub fn insert_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.text.entry(name.into()).or_insert_with(|| value.into());
    }

    fn take_file(&mut self, name: &str) -> Option<Upload> {
        self.files.remove(name)
    }

    /// Set a text value unless a non-empty one is already present.
    pub fn fill_text(&mut self, name: &str, value: impl Into<String>) {
        if self.text.get(name).is_none_or(String::is_empty) {
            self.text.insert(name.to_owned(), value.into());
        }
    }

    /// Text value, treating an empty string as absent. Whitespace counts as a value.
    fn take_text(&mut self, name: &str) -> Option<String> {
        self.text.remove(name).filter(|v| !v.is_empty())
    }
}

/// Facial component accepted by component search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacePart {
    Eyes,
    Nose,
    Mouth,
}

impl FacePart {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "eyes" => Some(Self::Eyes),
            "nose" => Some(Self::Nose),
            "mouth" => Some(Self::Mouth),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eyes => "eyes",
            Self::Nose => "nose",
            Self::Mouth => "mouth",
        }
    }
}

// =============================================================================
// BACKEND CALLS
// =============================================================================

/// Which gateway endpoint a form arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Recognize,
    RecognizeComponent,
    AddPerson,
}

impl CallKind {
    /// Backend path for this call.
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Recognize => "/api/recognize",
            Self::RecognizeComponent => "/api/recognize_component",
            Self::AddPerson => "/api/add_person",
        }
    }
}

/// A validated request ready to forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    Recognize { sketch: Upload },
    RecognizeComponent { sketch: Upload, part: FacePart },
    AddPerson { photo: Upload, name: String, age: String, record: String },
}

impl BackendCall {
    /// Validate a form for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`RecognitionError::Validation`] with the message shown to the user.
    pub fn from_form(kind: CallKind, mut fields: FormFields) -> Result<Self, RecognitionError> {
        match kind {
            CallKind::Recognize => {
                let sketch = fields
                    .take_file("sketch")
                    .ok_or(RecognitionError::Validation(NO_SKETCH))?;
                check_image(&sketch, INVALID_FILE)?;
                Ok(Self::Recognize { sketch })
            }
            CallKind::RecognizeComponent => {
                let sketch = fields
                    .take_file("sketch")
                    .ok_or(RecognitionError::Validation(NO_SKETCH))?;
                let part = fields
                    .take_text("part")
                    .and_then(|p| FacePart::parse(&p))
                    .ok_or(RecognitionError::Validation(INVALID_PART))?;
                check_image(&sketch, INVALID_FILE)?;
                Ok(Self::RecognizeComponent { sketch, part })
            }
            CallKind::AddPerson => {
                let photo = fields
                    .take_file("photo")
                    .ok_or(RecognitionError::Validation(NO_PHOTO))?;
                let (Some(name), Some(age), Some(record)) =
                    (fields.take_text("name"), fields.take_text("age"), fields.take_text("record"))
                else {
                    return Err(RecognitionError::Validation(MISSING_PERSON_DATA));
                };
                check_image(&photo, MISSING_PERSON_DATA)?;
                Ok(Self::AddPerson { photo, name, age, record })
            }
        }
    }

    #[must_use]
    pub fn kind(&self) -> CallKind {
        match self {
            Self::Recognize { .. } => CallKind::Recognize,
            Self::RecognizeComponent { .. } => CallKind::RecognizeComponent,
            Self::AddPerson { .. } => CallKind::AddPerson,
        }
    }

    fn into_form(self) -> reqwest::multipart::Form {
        use reqwest::multipart::{Form, Part};

        let file_part = |u: Upload| Part::bytes(u.bytes).file_name(u.file_name);
        match self {
            Self::Recognize { sketch } => Form::new().part("sketch", file_part(sketch)),
            Self::RecognizeComponent { sketch, part } => Form::new()
                .part("sketch", file_part(sketch))
                .text("part", part.as_str()),
            Self::AddPerson { photo, name, age, record } => Form::new()
                .part("photo", file_part(photo))
                .text("name", name)
                .text("age", age)
                .text("record", record),
        }
    }
}

fn check_image(upload: &Upload, message: &'static str) -> Result<(), RecognitionError> {
    if upload.file_name.is_empty() || !allowed_file(&upload.file_name) {
        return Err(RecognitionError::Validation(message));
    }
    Ok(())
}

/// A photo file name safe to forward as a single path segment.
///
/// # Errors
///
/// Returns [`RecognitionError::Validation`] for empty names or names that could escape the photo directory.
pub fn check_photo_name(file_name: &str) -> Result<(), RecognitionError> {
    if file_name.is_empty() || file_name.contains(['/', '\\']) || file_name == "." || file_name == ".." {
        return Err(RecognitionError::Validation(INVALID_FILE));
    }
    Ok(())
}

// =============================================================================
// CREDENTIALS / SESSION PASSTHROUGH
// =============================================================================

/// Browser credentials forwarded to the backend on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub cookie: Option<String>,
    pub authorization: Option<String>,
}

impl Credentials {
    fn apply(&self, mut req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(cookie) = &self.cookie {
            req = req.header(reqwest::header::COOKIE, cookie);
        }
        if let Some(auth) = &self.authorization {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        req
    }
}

/// A sign-in page request passed through to the backend as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRequest {
    pub method: reqwest::Method,
    /// Path plus query, e.g. `/login?next=%2Frecognition`.
    pub path_and_query: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
    pub credentials: Credentials,
}

/// The backend's answer to a [`SessionRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionReply {
    pub status: u16,
    pub location: Option<String>,
    pub content_type: Option<String>,
    pub set_cookies: Vec<String>,
    pub body: Vec<u8>,
}

/// Rewrite a redirect target on the backend's own origin to a local path.
#[must_use]
pub fn local_location(base_url: &str, location: &str) -> String {
    match location.strip_prefix(base_url.trim_end_matches('/')) {
        Some("") => "/".to_owned(),
        Some(rest) if rest.starts_with('/') => rest.to_owned(),
        _ => location.to_owned(),
    }
}

fn set_cookies(headers: &reqwest::header::HeaderMap) -> Vec<String> {
    headers
        .get_all(reqwest::header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::to_owned)
        .collect()
}

fn header_text(headers: &reqwest::header::HeaderMap, name: reqwest::header::HeaderName) -> Option<String> {
    headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned)
}

// =============================================================================
// REPLIES
// =============================================================================

/// Status, JSON body, and refreshed session cookies to relay to the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendReply {
    pub status: u16,
    pub body: Value,
    pub set_cookies: Vec<String>,
}

/// Parse a backend response body.
///
/// # Errors
///
/// Returns [`RecognitionError::SignInRequired`] for a redirect or 401 (the
/// backend's sign-in gate), and [`RecognitionError::InvalidReply`] if the body
/// is not JSON.
pub fn parse_reply(status: u16, text: &str) -> Result<BackendReply, RecognitionError> {
    if (300..400).contains(&status) || status == 401 {
        return Err(RecognitionError::SignInRequired);
    }
    let body = serde_json::from_str(text).map_err(|e| RecognitionError::InvalidReply(e.to_string()))?;
    Ok(BackendReply { status, body, set_cookies: Vec::new() })
}

/// A photo fetched from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoReply {
    pub status: u16,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

// =============================================================================
// BACKEND
// =============================================================================

/// Recognition backend transport. Enables mocking in tests.
#[async_trait::async_trait]
pub trait RecognitionBackend: Send + Sync {
    /// Forward a validated call and return the backend's reply.
    async fn call(&self, call: BackendCall, credentials: &Credentials) -> Result<BackendReply, RecognitionError>;

    /// Fetch an enrolled person's photo by file name.
    async fn photo(&self, file_name: &str, credentials: &Credentials) -> Result<PhotoReply, RecognitionError>;

    /// Pass a sign-in or sign-out request through to the backend.
    async fn session(&self, request: SessionRequest) -> Result<SessionReply, RecognitionError>;
}

/// Validate a form and forward it.
///
/// # Errors
///
/// Validation errors are returned without calling the backend; transport and
/// reply errors are passed through.
pub async fn submit(
    backend: &dyn RecognitionBackend,
    kind: CallKind,
    fields: FormFields,
    credentials: &Credentials,
) -> Result<BackendReply, RecognitionError> {
    let call = BackendCall::from_form(kind, fields)?;
    let endpoint = kind.endpoint();
    match backend.call(call, credentials).await {
        Ok(reply) => {
            tracing::info!(endpoint, status = reply.status, "recognition: backend replied");
            Ok(reply)
        }
        Err(e) => {
            tracing::warn!(error = %e, endpoint, "recognition: backend request failed");
            Err(e)
        }
    }
}

/// Recognition backend reached over HTTP.
pub struct HttpRecognitionBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpRecognitionBackend {
    /// Build a backend client from server config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &ServerConfig) -> Result<Self, RecognitionError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| RecognitionError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.recognition_url.clone() })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait::async_trait]
impl RecognitionBackend for HttpRecognitionBackend {
    async fn call(&self, call: BackendCall, credentials: &Credentials) -> Result<BackendReply, RecognitionError> {
        let url = self.url(call.kind().endpoint());
        let request = self.http.post(url).multipart(call.into_form());
        let response = credentials
            .apply(request)
            .send()
            .await
            .map_err(|e| RecognitionError::Unavailable(e.to_string()))?;
        let status = response.status().as_u16();
        let cookies = set_cookies(response.headers());
        let text = response
            .text()
            .await
            .map_err(|e| RecognitionError::Unavailable(e.to_string()))?;
        let mut reply = parse_reply(status, &text)?;
        reply.set_cookies = cookies;
        Ok(reply)
    }

    async fn photo(&self, file_name: &str, credentials: &Credentials) -> Result<PhotoReply, RecognitionError> {
        check_photo_name(file_name)?;
        let request = self.http.get(self.url(&format!("/data/photos/{file_name}")));
        let response = credentials
            .apply(request)
            .send()
            .await
            .map_err(|e| RecognitionError::Unavailable(e.to_string()))?;
        let status = response.status().as_u16();
        let content_type = header_text(response.headers(), reqwest::header::CONTENT_TYPE);
        let bytes = response
            .bytes()
            .await
            .map_err(|e| RecognitionError::Unavailable(e.to_string()))?;
        Ok(PhotoReply { status, content_type, bytes: bytes.to_vec() })
    }

    async fn session(&self, request: SessionRequest) -> Result<SessionReply, RecognitionError> {
        let mut builder = self
            .http
            .request(request.method, self.url(&request.path_and_query))
            .body(request.body);
        if let Some(content_type) = &request.content_type {
            builder = builder.header(reqwest::header::CONTENT_TYPE, content_type);
        }
        let response = request
            .credentials
            .apply(builder)
            .send()
            .await
            .map_err(|e| RecognitionError::Unavailable(e.to_string()))?;
        let headers = response.headers();
        let status = response.status().as_u16();
        let location = header_text(headers, reqwest::header::LOCATION).map(|l| local_location(&self.base_url, &l));
        let content_type = header_text(headers, reqwest::header::CONTENT_TYPE);
        let set_cookies = set_cookies(headers);
        let body = response
            .bytes()
            .await
            .map_err(|e| RecognitionError::Unavailable(e.to_string()))?;
        Ok(SessionReply { status, location, content_type, set_cookies, body: body.to_vec() })
    }
}

#[cfg(test)]
#[path = "recognition_test.rs"]
mod tests;
