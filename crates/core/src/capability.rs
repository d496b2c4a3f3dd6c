//! Caller capability interface
//!
//! The engine asks "is the caller allowed?" through [`CapabilitySet`] and never
//! looks at how the answer is computed. Implementations may consult RBAC
//! tables, ownership, or static configuration; the engine performs no caching
//! or retry around them.
//!
//! ## Categories
//!
//! | Method | Context | Used for |
//! |--------|---------|----------|
//! | `can_delete_run` | the run | Delete |
//! | `can_move_run` | the run | Move |
//! | `can_modify_workspace` | `{ workspace_id }` | Archive, Unarchive, Pause, Resume, Kill |

use crate::run_types::Run;
use crate::types::WorkspaceRef;
use std::sync::Arc;

/// Capability checks consulted after structural eligibility
pub trait CapabilitySet {
    /// Caller may permanently delete this run
    fn can_delete_run(&self, run: &Run) -> bool;

    /// Caller may move this run to another project
    fn can_move_run(&self, run: &Run) -> bool;

    /// Caller may modify resources in this workspace
    fn can_modify_workspace(&self, workspace: &WorkspaceRef) -> bool;
}

impl<T: CapabilitySet + ?Sized> CapabilitySet for &T {
    fn can_delete_run(&self, run: &Run) -> bool {
        (**self).can_delete_run(run)
    }

    fn can_move_run(&self, run: &Run) -> bool {
        (**self).can_move_run(run)
    }

    fn can_modify_workspace(&self, workspace: &WorkspaceRef) -> bool {
        (**self).can_modify_workspace(workspace)
    }
}

impl<T: CapabilitySet + ?Sized> CapabilitySet for Box<T> {
    fn can_delete_run(&self, run: &Run) -> bool {
        (**self).can_delete_run(run)
    }

    fn can_move_run(&self, run: &Run) -> bool {
        (**self).can_move_run(run)
    }

    fn can_modify_workspace(&self, workspace: &WorkspaceRef) -> bool {
        (**self).can_modify_workspace(workspace)
    }
}

impl<T: CapabilitySet + ?Sized> CapabilitySet for Arc<T> {
    fn can_delete_run(&self, run: &Run) -> bool {
        (**self).can_delete_run(run)
    }

    fn can_move_run(&self, run: &Run) -> bool {
        (**self).can_move_run(run)
    }

    fn can_modify_workspace(&self, workspace: &WorkspaceRef) -> bool {
        (**self).can_modify_workspace(workspace)
    }
}

/// Grants every capability
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllowAll;

impl CapabilitySet for AllowAll {
    fn can_delete_run(&self, _run: &Run) -> bool {
        true
    }

    fn can_move_run(&self, _run: &Run) -> bool {
        true
    }

    fn can_modify_workspace(&self, _workspace: &WorkspaceRef) -> bool {
        true
    }
}

/// Denies every capability
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DenyAll;

impl CapabilitySet for DenyAll {
    fn can_delete_run(&self, _run: &Run) -> bool {
        false
    }

    fn can_move_run(&self, _run: &Run) -> bool {
        false
    }

    fn can_modify_workspace(&self, _workspace: &WorkspaceRef) -> bool {
        false
    }
}
