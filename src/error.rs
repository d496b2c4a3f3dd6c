//! Unified error types for runact.
//!
//! This module wraps the errors of the member crates and presents a single
//! interface to users of the facade.

use std::path::PathBuf;
use thiserror::Error;

/// All runact errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Action name outside the closed action set
    #[error("invalid action: {0}")]
    InvalidAction(String),

    /// Permission policy could not be loaded
    #[error("policy error: {0}")]
    Policy(String),

    /// File could not be read
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for runact operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a boundary-validation failure.
    ///
    /// These indicate a caller bug, not a runtime condition.
    pub fn is_invalid_action(&self) -> bool {
        matches!(self, Error::InvalidAction(_))
    }

    /// Get the canonical error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::InvalidAction(_) => "InvalidAction",
            Error::Policy(_) => "Policy",
            Error::Io { .. } => "Io",
        }
    }
}

// Convert from core boundary errors
impl From<runact_core::Error> for Error {
    fn from(e: runact_core::Error) -> Self {
        match e {
            runact_core::Error::InvalidAction { name } => Error::InvalidAction(name),
        }
    }
}

// Convert from policy loading errors
impl From<runact_security::PolicyError> for Error {
    fn from(e: runact_security::PolicyError) -> Self {
        use runact_security::PolicyError;
        match e {
            PolicyError::Io { path, source } => Error::Io {
                path: PathBuf::from(path),
                source,
            },
            err @ (PolicyError::Parse(_) | PolicyError::Invalid(_)) => Error::Policy(err.to_string()),
        }
    }
}
