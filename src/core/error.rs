use std::fmt;

/// Error types for statuscheck operations.
///
/// Transport failures of individual probes are never represented here; they
/// are absorbed into [`crate::core::types::Classification::Error`] at the
/// probe boundary. Everything in this enum is fatal for a run.
#[derive(Debug)]
pub enum StatusCheckError {
    /// IO error not tied to a specific phase
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Input file could not be opened or read
    Input {
        path: String,
        source: std::io::Error,
    },

    /// Report destination could not be created or written
    Output {
        path: String,
        source: std::io::Error,
    },

    /// HTTP client construction error
    Http(reqwest::Error),

    /// JSON serialization error
    Json(serde_json::Error),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for StatusCheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusCheckError::Io(err) => write!(f, "IO error: {err}"),
            StatusCheckError::Config(msg) => write!(f, "Configuration error: {msg}"),
            StatusCheckError::Input { path, source } => {
                write!(f, "Input error: could not read '{path}': {source}")
            }
            StatusCheckError::Output { path, source } => {
                write!(f, "Output error: could not write '{path}': {source}")
            }
            StatusCheckError::Http(err) => write!(f, "HTTP error: {err}"),
            StatusCheckError::Json(err) => write!(f, "JSON error: {err}"),
            StatusCheckError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for StatusCheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatusCheckError::Io(err) => Some(err),
            StatusCheckError::Input { source, .. } => Some(source),
            StatusCheckError::Output { source, .. } => Some(source),
            StatusCheckError::Http(err) => Some(err),
            StatusCheckError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StatusCheckError {
    fn from(err: std::io::Error) -> Self {
        StatusCheckError::Io(err)
    }
}

impl From<reqwest::Error> for StatusCheckError {
    fn from(err: reqwest::Error) -> Self {
        StatusCheckError::Http(err)
    }
}

impl From<serde_json::Error> for StatusCheckError {
    fn from(err: serde_json::Error) -> Self {
        StatusCheckError::Json(err)
    }
}

/// Type alias for Results using StatusCheckError
pub type Result<T> = std::result::Result<T, StatusCheckError>;
