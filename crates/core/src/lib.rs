//! Core types for run action authorization
//!
//! This crate holds everything the eligibility engine reads:
//! - [`Run`] and [`RunState`]: the observed run record
//! - [`RunAction`]: the closed set of management actions
//! - [`states`]: the state classification tables
//! - [`CapabilitySet`]: the caller capability interface
//! - [`Error`]: boundary validation errors

pub mod action;
pub mod capability;
pub mod error;
pub mod run_types;
pub mod states;
pub mod types;

pub use action::{parse_actions, RunAction};
pub use capability::{AllowAll, CapabilitySet, DenyAll};
pub use error::{Error, Result};
pub use run_types::{ExperimentInfo, Run, RunState};
pub use states::{in_set, StateClass, StateSet};
pub use types::{ProjectId, RunId, WorkspaceId, WorkspaceRef};
