//! Action resolvers
//!
//! Entry points that turn a candidate action list into the actions currently
//! valid for one run or for a selection of runs.
//!
//! ## Evaluation
//!
//! 1. Structural eligibility ([`is_eligible`]): cheap, no external call
//! 2. Capability gate ([`is_permitted`]): consults the caller's capabilities
//!
//! Both must pass. Output is always a subsequence of the candidates, in
//! input order.
//!
//! ## Union Semantics
//!
//! For a selection, an action is offered if it is valid for **at least one**
//! run. Applying a bulk action to eligible members and skipping the rest is
//! the caller's job.

use crate::eligibility::is_eligible;
use crate::gate::is_permitted;
use runact_core::{parse_actions, CapabilitySet, Result, Run, RunAction};
use std::borrow::Borrow;
use tracing::{debug, trace};

/// Fixed-size membership mask over the closed action set
#[derive(Debug, Clone, Copy, Default)]
struct ActionMask([bool; RunAction::COUNT]);

impl ActionMask {
    fn insert(&mut self, action: RunAction) {
        self.0[action.index()] = true;
    }

    fn contains(&self, action: RunAction) -> bool {
        self.0[action.index()]
    }
}

/// Resolve the actions valid for a single run
///
/// Returns the candidates that pass structural eligibility and then the
/// capability gate, preserving their order.
pub fn resolve_actions<C: CapabilitySet + ?Sized>(
    run: &Run,
    candidates: &[RunAction],
    caps: &C,
) -> Vec<RunAction> {
    if run.state.is_unspecified() {
        debug!(run_id = %run.id, "run state unspecified, state-gated actions unavailable");
    }

    let allowed: Vec<RunAction> = candidates
        .iter()
        .copied()
        .filter(|&action| is_eligible(action, run))
        .filter(|&action| is_permitted(action, run, caps))
        .collect();

    trace!(
        run_id = %run.id,
        state = %run.state,
        candidates = candidates.len(),
        allowed = ?allowed,
        "resolved run actions"
    );
    allowed
}

/// Resolve the actions valid for at least one run in a selection
///
/// An empty selection yields an empty list without consulting capabilities.
pub fn resolve_actions_union<R, C>(runs: &[R], candidates: &[RunAction], caps: &C) -> Vec<RunAction>
where
    R: Borrow<Run>,
    C: CapabilitySet + ?Sized,
{
    if runs.is_empty() {
        return Vec::new();
    }

    let mut offered = ActionMask::default();
    for run in runs {
        for action in resolve_actions(run.borrow(), candidates, caps) {
            offered.insert(action);
        }
    }

    let union: Vec<RunAction> = candidates
        .iter()
        .copied()
        .filter(|&action| offered.contains(action))
        .collect();

    trace!(runs = runs.len(), union = ?union, "resolved selection actions");
    union
}

/// [`resolve_actions`] over action names
///
/// Every name is validated before anything is evaluated; an unknown name
/// returns `InvalidAction`.
pub fn resolve_named_actions<S, C>(run: &Run, names: &[S], caps: &C) -> Result<Vec<RunAction>>
where
    S: AsRef<str>,
    C: CapabilitySet + ?Sized,
{
    let candidates = parse_candidates(names)?;
    Ok(resolve_actions(run, &candidates, caps))
}

/// [`resolve_actions_union`] over action names
pub fn resolve_named_actions_union<R, S, C>(
    runs: &[R],
    names: &[S],
    caps: &C,
) -> Result<Vec<RunAction>>
where
    R: Borrow<Run>,
    S: AsRef<str>,
    C: CapabilitySet + ?Sized,
{
    let candidates = parse_candidates(names)?;
    Ok(resolve_actions_union(runs, &candidates, caps))
}

fn parse_candidates<S: AsRef<str>>(names: &[S]) -> Result<Vec<RunAction>> {
    parse_actions(names).map_err(|e| {
        debug!(error = %e, "rejected candidate action list");
        e
    })
}
