//! Error types for ticket intake, balancing, and the command protocol.

use thiserror::Error;

use crate::validation::ValidationError;

/// Main error type for queue operations.
#[derive(Debug, Error)]
pub enum QueueError {
    /// Command arguments do not match the required grammar.
    #[error("{0}")]
    MalformedInput(String),

    /// First token of a command line is not a recognized command.
    #[error("Unknown command '{0}'. Use ENQUEUE or DISTRIBUTE.")]
    UnknownCommand(String),

    /// Window count absent or non-positive at startup.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Operation attempted after the batch was distributed.
    #[error("Session closed: tickets were already distributed")]
    SessionClosed,

    /// Ticket batch failed integrity checks before balancing.
    #[error("Invalid ticket batch: {}", summarize(.0))]
    InvalidBatch(Vec<ValidationError>),

    /// Reading commands or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report could not be encoded as JSON.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QueueError {
    /// Whether the command loop can report this error and keep reading.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MalformedInput(_) | Self::UnknownCommand(_) | Self::SessionClosed
        )
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for queue operations.
pub type Result<T> = std::result::Result<T, QueueError>;
