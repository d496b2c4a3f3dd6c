//! Main entry point for runact.
//!
//! This module provides the `Authorizer` struct, which binds a caller's
//! capabilities to the resolvers so UI and CLI code can ask for actions
//! without threading the capability object through every call.

use crate::error::Result;
use crate::types::{AllowAll, CapabilitySet, PermissionPolicy, Run, RunAction};
use std::borrow::Borrow;
use std::path::Path;

/// Resolves valid run actions on behalf of one caller.
///
/// Construct one per capability snapshot. The authorizer holds no other
/// state, so it is as cheap to rebuild on each refresh as the capability
/// object it wraps.
///
/// # Example
///
/// ```
/// use runact::prelude::*;
///
/// let authorizer = Authorizer::new(PermissionPolicy::new());
/// let run = Run::new(RunId(1), WorkspaceId(1), RunState::Completed);
///
/// let actions = authorizer.actions_for(&run, &[RunAction::Archive, RunAction::Kill]);
/// assert_eq!(actions, vec![RunAction::Archive]);
/// ```
#[derive(Debug, Clone)]
pub struct Authorizer<C> {
    capabilities: C,
}

impl<C: CapabilitySet> Authorizer<C> {
    /// Create an authorizer for the given capabilities.
    pub fn new(capabilities: C) -> Self {
        Authorizer { capabilities }
    }

    /// The wrapped capability object.
    pub fn capabilities(&self) -> &C {
        &self.capabilities
    }

    /// Actions valid for a single run, in candidate order.
    pub fn actions_for(&self, run: &Run, candidates: &[RunAction]) -> Vec<RunAction> {
        runact_engine::resolve_actions(run, candidates, &self.capabilities)
    }

    /// Actions valid for at least one run of a selection, in candidate order.
    ///
    /// # Example
    ///
    /// ```
    /// use runact::prelude::*;
    ///
    /// let authorizer = Authorizer::new(AllowAll);
    /// let selection = vec![
    ///     Run::new(RunId(1), WorkspaceId(1), RunState::Completed).archived(true),
    ///     Run::new(RunId(2), WorkspaceId(1), RunState::Completed),
    /// ];
    ///
    /// let actions = authorizer.actions_for_selection(
    ///     &selection,
    ///     &[RunAction::Archive, RunAction::Unarchive],
    /// );
    /// assert_eq!(actions, vec![RunAction::Archive, RunAction::Unarchive]);
    /// ```
    pub fn actions_for_selection<R: Borrow<Run>>(
        &self,
        runs: &[R],
        candidates: &[RunAction],
    ) -> Vec<RunAction> {
        runact_engine::resolve_actions_union(runs, candidates, &self.capabilities)
    }

    /// [`actions_for`](Self::actions_for) over action names.
    ///
    /// Fails with [`Error::InvalidAction`](crate::Error::InvalidAction) if any
    /// name is unknown.
    pub fn actions_for_names<S: AsRef<str>>(&self, run: &Run, names: &[S]) -> Result<Vec<RunAction>> {
        Ok(runact_engine::resolve_named_actions(run, names, &self.capabilities)?)
    }

    /// [`actions_for_selection`](Self::actions_for_selection) over action names.
    pub fn actions_for_selection_names<R: Borrow<Run>, S: AsRef<str>>(
        &self,
        runs: &[R],
        names: &[S],
    ) -> Result<Vec<RunAction>> {
        Ok(runact_engine::resolve_named_actions_union(
            runs,
            names,
            &self.capabilities,
        )?)
    }
}

impl Authorizer<AllowAll> {
    /// Authorizer that only applies structural eligibility.
    pub fn unrestricted() -> Self {
        Authorizer::new(AllowAll)
    }
}

impl Authorizer<PermissionPolicy> {
    /// Authorizer backed by a policy file.
    pub fn from_policy_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Authorizer::new(PermissionPolicy::from_path(path)?))
    }
}
