//! Error types for settings and configuration

use custif_embed::HttpError;
use thiserror::Error;

/// Settings input could not be read
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Settings must be a JSON object")]
    NotAnObject,
}

/// Renderer configuration is unusable
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialization failed: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Value out of range: {0}")]
    OutOfRange(String),
    #[error("Invalid URL for {field}: {value}")]
    InvalidUrl { field: &'static str, value: String },
    #[error("HTTP client setup failed: {0}")]
    Http(#[from] HttpError),
}

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
