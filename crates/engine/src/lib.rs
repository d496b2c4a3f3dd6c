//! Run action eligibility engine
//!
//! Given runs, candidate actions and a caller's capabilities, computes which
//! management actions are currently valid.
//!
//! ## Layers
//!
//! - [`eligibility`]: per-action structural predicates over run state and flags
//! - [`gate`]: per-action capability checks
//! - [`resolver`]: single-run and union (multi-run) entry points
//!
//! Every function here is pure: no I/O, no caching, no shared mutable state.
//!
//! ```
//! use runact_core::{AllowAll, Run, RunAction, RunId, RunState, WorkspaceId};
//! use runact_engine::resolve_actions;
//!
//! let run = Run::new(RunId(1), WorkspaceId(1), RunState::Completed);
//! let actions = resolve_actions(&run, &[RunAction::Archive, RunAction::Kill], &AllowAll);
//! assert_eq!(actions, vec![RunAction::Archive]);
//! ```

pub mod eligibility;
pub mod gate;
pub mod resolver;

pub use eligibility::{can_action_run, is_eligible};
pub use gate::is_permitted;
pub use resolver::{
    resolve_actions, resolve_actions_union, resolve_named_actions, resolve_named_actions_union,
};
