//! Error types for fetching and rendering

use thiserror::Error;

/// A resource could not be retrieved
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success status
    #[error("Failed to fetch {path}: {status}")]
    Status { path: String, status: u16 },

    /// The request never produced a response
    #[error("Failed to fetch {path}: {message}")]
    Network { path: String, message: String },

    /// The body was not the JSON shape the caller asked for
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn path(&self) -> &str {
        match self {
            FetchError::Status { path, .. }
            | FetchError::Network { path, .. }
            | FetchError::Decode { path, .. } => path,
        }
    }

    /// HTTP status, when the failure carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A page section could not be rendered
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl RenderError {
    /// Human-readable detail shown inline in the affected container
    pub fn message(&self) -> String {
        self.to_string()
    }
}
