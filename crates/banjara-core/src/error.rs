use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

/// Failure of a backend gateway call.
///
/// `Display` yields the bare user-facing text: the backend's `error` field
/// when it sent one, otherwise the transport's own description. Views prepend
/// their own prefix.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request never produced an HTTP response.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A success response whose body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The local file to upload could not be read.
    #[error("could not read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl GatewayError {
    /// Build the error for a non-success response, preferring the body's
    /// structured `error` field.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("Request failed with status code {}", status));

        GatewayError::Api { status, message }
    }
}
