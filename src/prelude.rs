//! Convenient imports for runact.
//!
//! ```ignore
//! use runact::prelude::*;
//!
//! let authorizer = Authorizer::new(PermissionPolicy::new());
//! let actions = authorizer.actions_for(&run, &RunAction::ALL);
//! ```

// Main entry point
pub use crate::authorizer::Authorizer;

// Error handling
pub use crate::error::{Error, Result};

// Core types
pub use crate::types::{ExperimentInfo, Run, RunAction, RunId, RunState, WorkspaceId};

// Capabilities
pub use crate::types::{AccessMode, AllowAll, CapabilitySet, DenyAll, Grants, PermissionPolicy};
