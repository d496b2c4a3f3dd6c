//! Public types for the runact facade.
//!
//! This module re-exports types from the member crates with a single import path.

// Run model
pub use runact_core::{ExperimentInfo, ProjectId, Run, RunId, RunState, WorkspaceId, WorkspaceRef};

// Actions
pub use runact_core::RunAction;

// State tables
pub use runact_core::states::{StateClass, StateSet, DELETABLE, KILLABLE, PAUSABLE, TERMINAL};

// Capabilities
pub use runact_core::{AllowAll, CapabilitySet, DenyAll};

// Permission policy
pub use runact_security::{AccessMode, Grants, PermissionPolicy};
