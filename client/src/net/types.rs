//! Wire types for the recognition and add-person endpoints.
//!
//! DESIGN
//! ======
//! Replies are parsed by pure functions that take the HTTP success flag and
//! the raw body, so every branch the results panel can show is testable
//! without a browser. Numeric fields are kept as the text the backend sent.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Message shown when a failed response carries no `error` field.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred.";

/// Errors surfaced by client HTTP helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a failure status; the message is shown verbatim.
    #[error("{0}")]
    Server(String),
    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),
    /// The reply body was not the expected JSON.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Browser-only call made during server rendering.
    #[error("not available on server")]
    Unavailable,
}

/// Details of a confident match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchCard {
    pub name: String,
    /// Whole-face replies only.
    pub age: Option<String>,
    /// Whole-face replies only.
    pub criminal_record: Option<String>,
    /// Component replies only (`eyes`, `nose`, `mouth`).
    pub part: Option<String>,
    pub similarity: String,
    pub distance: String,
    pub photo_path: Option<String>,
}

/// A successful recognition reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecognitionReply {
    Match(MatchCard),
    NoMatch { message: String },
}

#[derive(Deserialize)]
struct RawRecognitionReply {
    #[serde(rename = "match", default)]
    matched: bool,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_display_text")]
    age: Option<String>,
    #[serde(default, deserialize_with = "deserialize_display_text")]
    criminal_record: Option<String>,
    #[serde(default)]
    part: Option<String>,
    #[serde(default, deserialize_with = "deserialize_display_text")]
    similarity: Option<String>,
    #[serde(default, deserialize_with = "deserialize_display_text")]
    distance: Option<String>,
    #[serde(default)]
    photo_path: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: Option<String>,
}

/// The message to show for a failed response body.
#[must_use]
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| UNKNOWN_ERROR.to_owned())
}

/// Parse a recognition response.
///
/// # Errors
///
/// [`ApiError::Server`] when `ok` is false, [`ApiError::Decode`] when a
/// success body is not a recognition reply.
pub fn parse_recognition_reply(ok: bool, body: &str) -> Result<RecognitionReply, ApiError> {
    if !ok {
        return Err(ApiError::Server(error_message(body)));
    }
    let raw: RawRecognitionReply = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !raw.matched {
        return Ok(RecognitionReply::NoMatch { message: raw.message.unwrap_or_default() });
    }
    Ok(RecognitionReply::Match(MatchCard {
        name: raw.name.unwrap_or_default(),
        age: raw.age,
        criminal_record: raw.criminal_record,
        part: raw.part,
        similarity: raw.similarity.unwrap_or_default(),
        distance: raw.distance.unwrap_or_default(),
        photo_path: raw.photo_path,
    }))
}

/// Parse an add-person response into the confirmation message.
///
/// # Errors
///
/// [`ApiError::Server`] when `ok` is false.
pub fn parse_add_person_reply(ok: bool, body: &str) -> Result<String, ApiError> {
    if !ok {
        return Err(ApiError::Server(error_message(body)));
    }
    Ok(serde_json::from_str::<MessageBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| "Person added.".to_owned()))
}

/// Accept a string or a number and keep exactly the text the backend sent.
fn deserialize_display_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        serde_json::Value::Bool(b) => Ok(Some(b.to_string())),
        _ => Err(D::Error::custom("expected string or number")),
    }
}
