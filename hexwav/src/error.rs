//! Error types for hexwav
//!
//! Defines the crate error type using thiserror for clear error propagation.
//! Every variant is terminal for a run; nothing is retried internally.

use thiserror::Error;

/// Main error type for hexwav
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid effect selector or duration argument
    #[error("Invalid command-line arguments: {0}")]
    Usage(String),

    /// Header record missing, truncated, or failing a marker check
    #[error("Error processing WAV file: {0}")]
    Format(String),

    /// Sample buffer could not be reserved
    #[error("Resource error: {0}")]
    Resource(String),

    /// Record handed to the encoder has an unusable length
    #[error("Encode error: {0}")]
    Encode(String),

    /// Configuration file loading errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output stream errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a format error
    pub fn format<S: Into<String>>(msg: S) -> Self {
        Error::Format(msg.into())
    }

    /// Create a usage error
    pub fn usage<S: Into<String>>(msg: S) -> Self {
        Error::Usage(msg.into())
    }
}

/// Convenience Result type using hexwav Error
pub type Result<T> = std::result::Result<T, Error>;
