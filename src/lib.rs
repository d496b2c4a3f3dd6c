//! # runact
//!
//! Run action authorization: decide which management actions (archive,
//! delete, kill, move, pause, resume, unarchive) are valid for a run or for a
//! selection of runs, given the caller's capabilities.
//!
//! ## Quick Start
//!
//! ```
//! use runact::prelude::*;
//!
//! let authorizer = Authorizer::new(PermissionPolicy::new());
//!
//! let paused = Run::new(RunId(7), WorkspaceId(1), RunState::Paused)
//!     .with_experiment(ExperimentInfo::multitrial());
//!
//! // Multi-trial experiments cannot be paused, but a paused one can resume.
//! let actions = authorizer.actions_for(&paused, &[RunAction::Pause, RunAction::Resume]);
//! assert_eq!(actions, vec![RunAction::Resume]);
//! ```
//!
//! ## Layers
//!
//! 1. **State tables** - [`TERMINAL`], [`DELETABLE`], [`KILLABLE`], [`PAUSABLE`]
//! 2. **Eligibility** - structural predicates per action
//! 3. **Capabilities** - [`CapabilitySet`], e.g. [`PermissionPolicy`]
//! 4. **Resolution** - [`Authorizer`] for one run or a selection (union)
//!
//! The engine is pure and synchronous; fetching runs and permissions is the
//! caller's job.

#![warn(missing_docs)]

mod authorizer;
mod error;
mod types;

pub mod prelude;

// Re-export main entry point
pub use authorizer::Authorizer;
pub use error::{Error, Result};

// Re-export engine entry points for callers that manage capabilities directly
pub use runact_engine::{
    can_action_run, resolve_actions, resolve_actions_union, resolve_named_actions,
    resolve_named_actions_union,
};

// Re-export types
pub use types::*;
