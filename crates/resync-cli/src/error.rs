//! Error types for resync-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from resync-core
    #[error(transparent)]
    Core(#[from] resync_core::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Report serialization error
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    /// Logging could not be initialized
    #[error("Failed to initialize logging: {message}")]
    Logging { message: String },

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
