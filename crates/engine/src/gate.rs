//! Capability gate
//!
//! Second filter after structural eligibility: "is the caller allowed?"
//! Each action consults the [`CapabilitySet`] with the minimal context it
//! needs.
//!
//! | Action | Query | Extra gate |
//! |--------|-------|------------|
//! | Delete | `can_delete_run(run)` | |
//! | Move | `can_move_run(run)` | |
//! | Archive, Unarchive | `can_modify_workspace(ws)` | |
//! | Pause, Resume, Kill | `can_modify_workspace(ws)` | experiment not unmanaged |

use runact_core::{CapabilitySet, Run, RunAction};

/// Check whether the caller may perform `action` on `run`
pub fn is_permitted<C: CapabilitySet + ?Sized>(action: RunAction, run: &Run, caps: &C) -> bool {
    match action {
        RunAction::Delete => caps.can_delete_run(run),
        RunAction::Move => caps.can_move_run(run),
        RunAction::Archive | RunAction::Unarchive => caps.can_modify_workspace(&run.workspace()),
        // Unmanaged experiments are driven outside the scheduler.
        RunAction::Pause | RunAction::Resume | RunAction::Kill => {
            caps.can_modify_workspace(&run.workspace()) && !run.is_unmanaged()
        }
    }
}
