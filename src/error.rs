//! Error types for sprint-dl
//!
//! Every stage of the pipeline returns a [`Result`]; the orchestrator decides
//! which failures abort the run and which only skip an item.

use thiserror::Error;

/// Result type alias for sprint-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for sprint-dl
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "base_url")
        key: Option<String>,
    },

    /// Transport-level failure (connect, timeout, body read)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    HttpStatus {
        /// Response status code
        status: u16,
        /// The requested URL
        url: String,
    },

    /// Response body could not be decoded into the expected record
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        /// The requested URL
        url: String,
        /// Underlying serde_json error
        #[source]
        source: serde_json::Error,
    },

    /// I/O error while writing an attachment or the report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No board matched the configured name
    #[error("board not found: {name}")]
    BoardNotFound {
        /// The board name that was looked up
        name: String,
    },

    /// No active sprint on the board matched the configured keyword
    #[error("no active sprint on board {board_id} matching '{keyword}'")]
    SprintNotFound {
        /// Board that was searched
        board_id: u64,
        /// Sprint keyword that was looked up
        keyword: String,
    },

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Build a configuration error for a specific key
    pub fn config(key: &str, message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.to_string()),
        }
    }

    /// True for the two resolution failures that abort a run
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::BoardNotFound { .. } | Error::SprintNotFound { .. }
        )
    }
}
