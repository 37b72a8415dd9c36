//! Error handling module for the command generator
//!
//! Every failure here is a configuration-authoring error meant to be fixed
//! by a human, so there is no retry or recovery path: errors are returned to
//! the caller as soon as they are detected and no partial command list is
//! ever produced.

use thiserror::Error;

/// Main error type for command generation
#[derive(Error, Debug)]
pub enum CmdGenError {
    /// IO errors (reading or writing job files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A descriptor field is missing, empty or cannot be interpolated safely
    #[error("Malformed configuration: {0}")]
    MalformedConfig(String),

    /// The scenario exists but this platform does not supply commands for it
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// The selected template has no such scenario at all
    #[error("Unsupported scenario: {0}")]
    UnsupportedScenario(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for command generation
pub type Result<T> = std::result::Result<T, CmdGenError>;

impl CmdGenError {
    /// Create a malformed configuration error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedConfig(msg.into())
    }

    /// Create a not-implemented error
    pub fn not_implemented(msg: impl Into<String>) -> Self {
        Self::NotImplemented(msg.into())
    }

    /// Create an unsupported scenario error
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::UnsupportedScenario(msg.into())
    }

    /// True for errors caused by descriptor content rather than a missing scenario
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedConfig(_))
    }
}
