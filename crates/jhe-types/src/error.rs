//! Error types shared across the cleaner.

use thiserror::Error;

/// Unified error type for cleaner-wide concerns.
#[derive(Debug, Error)]
pub enum CleanerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
