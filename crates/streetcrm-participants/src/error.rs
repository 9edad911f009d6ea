//! Error types for the participant client

/// Errors that can occur while talking to the participant API or the page
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Server returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid event id: {0:?}")]
    InvalidEventId(String),

    #[error("Required page element missing: #{0}")]
    MissingElement(String),
}

impl PanelError {
    /// Text shown to the user when a save fails
    ///
    /// A status error shows the raw response body (falling back to the
    /// status code when the body is empty); anything else shows its message.
    pub fn alert_text(&self) -> String {
        match self {
            PanelError::Status { status, body } if body.trim().is_empty() => {
                format!("HTTP {}", status)
            }
            PanelError::Status { body, .. } => body.clone(),
            PanelError::Http(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for participant operations
pub type Result<T> = std::result::Result<T, PanelError>;
