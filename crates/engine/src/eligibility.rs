//! Structural eligibility predicates
//!
//! Answers "does this action make sense for the run's current lifecycle
//! state?" without asking anything about the caller.
//!
//! | Action | Eligible when |
//! |--------|---------------|
//! | Archive | not archived, parent not archived, state is terminal |
//! | Unarchive | archived, state is terminal |
//! | Delete | state is deletable |
//! | Kill | state is killable |
//! | Move | not archived, parent not archived |
//! | Pause | state is pausable, experiment (if any) is not multi-trial |
//! | Resume | state is exactly `Paused` |

use runact_core::states::{DELETABLE, KILLABLE, PAUSABLE, TERMINAL};
use runact_core::{Run, RunAction, RunState};

/// Check the structural precondition of `action` on `run`
///
/// Total over all runs. A run in `Unspecified` state fails every state-gated
/// predicate.
pub fn is_eligible(action: RunAction, run: &Run) -> bool {
    match action {
        RunAction::Archive => !run.is_any_archived() && TERMINAL.contains(run.state),
        RunAction::Unarchive => run.archived && TERMINAL.contains(run.state),
        RunAction::Delete => DELETABLE.contains(run.state),
        RunAction::Kill => KILLABLE.contains(run.state),
        RunAction::Move => !run.is_any_archived(),
        RunAction::Pause => PAUSABLE.contains(run.state) && !run.is_multitrial(),
        RunAction::Resume => run.state == RunState::Paused,
    }
}

/// Alias of [`is_eligible`] with the run-first argument order used by callers
/// that check one run against many actions
pub fn can_action_run(action: RunAction, run: &Run) -> bool {
    is_eligible(action, run)
}
