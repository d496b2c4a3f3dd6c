//! Error types for the authorization core
//!
//! The engine itself is total: malformed runs are excluded from results, never
//! reported. The only failure is an action name outside the closed
//! [`RunAction`](crate::RunAction) set, which is a caller bug and is rejected
//! at the parse boundary.
//!
//! ## Error Codes (Canonical)
//!
//! | Code | Description |
//! |------|-------------|
//! | InvalidAction | Action name is not a member of the closed action set |

use thiserror::Error;

/// Authorization core errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Action name outside the closed action set
    #[error("invalid action: '{name}' is not a run action")]
    InvalidAction {
        /// The rejected name, as supplied
        name: String,
    },
}

/// Result type for authorization core operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an invalid-action error
    pub fn invalid_action(name: impl Into<String>) -> Self {
        Error::InvalidAction { name: name.into() }
    }

    /// Get the canonical error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::InvalidAction { .. } => "InvalidAction",
        }
    }
}
