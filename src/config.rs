//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_RECOGNITION_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_CATALOG_PATH: &str = "assets/catalog.json";
pub const DEFAULT_ASSETS_DIR: &str = "static/assets";
pub const DEFAULT_RECOGNITION_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_RECOGNITION_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// A variable was set to an empty string where a value is required.
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecognitionTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub recognition_url: String,
    pub catalog_path: PathBuf,
    pub assets_dir: PathBuf,
    pub timeouts: RecognitionTimeouts,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `RECOGNITION_URL`: default `http://127.0.0.1:5000`
    /// - `CATALOG_PATH`: default `assets/catalog.json`
    /// - `ASSETS_DIR`: default `static/assets`
    /// - `RECOGNITION_TIMEOUT_SECS`: default 60
    /// - `RECOGNITION_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse or the backend URL is blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_var(&lookup, "PORT", DEFAULT_PORT)?;
        let recognition_url = lookup("RECOGNITION_URL")
            .unwrap_or_else(|| DEFAULT_RECOGNITION_URL.to_owned())
            .trim()
            .trim_end_matches('/')
            .to_owned();
        if recognition_url.is_empty() {
            return Err(ConfigError::Empty { var: "RECOGNITION_URL" });
        }
        let catalog_path = PathBuf::from(lookup("CATALOG_PATH").unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_owned()));
        let assets_dir = PathBuf::from(lookup("ASSETS_DIR").unwrap_or_else(|| DEFAULT_ASSETS_DIR.to_owned()));
        let timeouts = RecognitionTimeouts {
            request_secs: parse_var(&lookup, "RECOGNITION_TIMEOUT_SECS", DEFAULT_RECOGNITION_TIMEOUT_SECS)?,
            connect_secs: parse_var(
                &lookup,
                "RECOGNITION_CONNECT_TIMEOUT_SECS",
                DEFAULT_RECOGNITION_CONNECT_TIMEOUT_SECS,
            )?,
        };

        Ok(Self { port, recognition_url, catalog_path, assets_dir, timeouts })
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
