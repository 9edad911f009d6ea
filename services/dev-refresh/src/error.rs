//! Error types for the dev refresh tool

use std::path::PathBuf;

/// Errors that stop a refresh
#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No virtual environment active: ${0} is not set")]
    VirtualEnvInactive(String),

    #[error("Application config file not found: {}", .0.display())]
    ConfigFileMissing(PathBuf),

    #[error("Could not read application settings from {}: {message}", .path.display())]
    Settings { path: PathBuf, message: String },

    #[error("Refusing to reset a non-SQLite database (engine: {})", .0.as_deref().unwrap_or("not set"))]
    NotSqlite(Option<String>),

    #[error("No database name set in the [database] section")]
    MissingDatabaseName,

    #[error("Failed to start {step}: {message}")]
    Spawn { step: String, message: String },

    #[error("{step} failed with exit code {code}")]
    StepFailed { step: String, code: i32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RefreshError {
    /// Process exit status for this error
    ///
    /// A failed step passes its own code through; everything else is 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            RefreshError::StepFailed { code, .. } => u8::try_from(*code)
                .ok()
                .filter(|code| *code != 0)
                .unwrap_or(1),
            _ => 1,
        }
    }
}

/// Result type alias for refresh operations
pub type Result<T> = std::result::Result<T, RefreshError>;
