//! Error types for the panel client.

/// Result type for panel operations.
pub type PanelResult<T> = Result<T, PanelError>;

/// Error types that can occur when talking to the control-plane server.
///
/// Semantic conditions reported by the panel itself (e.g. "no active
/// sequence") are not errors; they arrive as [`crate::PanelReply::Condition`].
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// HTTP request failed at the transport level.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Control-plane server returned a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body could not be deserialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl PanelError {
    /// Create an API error from a status code and response body.
    pub fn from_response(status: u16, reason: Option<&str>, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            reason.unwrap_or("request failed").to_string()
        } else {
            body.to_string()
        };
        Self::Api { status, message }
    }
}
