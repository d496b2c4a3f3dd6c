//! Access control configuration for run actions.
//!
//! This crate provides [`PermissionPolicy`], a configurable
//! [`CapabilitySet`] built from an [`AccessMode`], default [`Grants`] and
//! per-workspace overrides.
//!
//! ```
//! use runact_core::{CapabilitySet, WorkspaceId, WorkspaceRef};
//! use runact_security::{AccessMode, Grants, PermissionPolicy};
//!
//! let policy = PermissionPolicy::new()
//!     .default_grants(Grants::none())
//!     .workspace(WorkspaceId(1), Grants::all());
//!
//! assert!(policy.can_modify_workspace(&WorkspaceRef::new(WorkspaceId(1))));
//! assert!(!policy.can_modify_workspace(&WorkspaceRef::new(WorkspaceId(2))));
//!
//! let read_only = policy.access_mode(AccessMode::ReadOnly);
//! assert!(!read_only.can_modify_workspace(&WorkspaceRef::new(WorkspaceId(1))));
//! ```

use runact_core::{CapabilitySet, Run, WorkspaceId, WorkspaceRef};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Controls whether the caller may change anything at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessMode {
    ReadWrite,
    ReadOnly,
}

impl Default for AccessMode {
    fn default() -> Self {
        AccessMode::ReadWrite
    }
}

/// Capability grants within one workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grants {
    /// Archive, unarchive, pause, resume and kill runs.
    #[serde(default)]
    pub modify: bool,
    /// Permanently delete runs.
    #[serde(default)]
    pub delete: bool,
    /// Move runs between projects.
    #[serde(default, rename = "move")]
    pub move_runs: bool,
}

impl Grants {
    pub fn all() -> Self {
        Grants {
            modify: true,
            delete: true,
            move_runs: true,
        }
    }

    pub fn none() -> Self {
        Grants {
            modify: false,
            delete: false,
            move_runs: false,
        }
    }

    /// Modify-only grants: lifecycle changes without delete or move.
    pub fn modify_only() -> Self {
        Grants {
            modify: true,
            ..Grants::none()
        }
    }
}

impl Default for Grants {
    fn default() -> Self {
        Grants::all()
    }
}

/// Errors raised while loading a policy.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("failed to read policy {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse policy: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid policy: {0}")]
    Invalid(String),
}

/// Permission policy answering capability checks from configuration.
///
/// Use the builder pattern to configure a policy:
///
/// ```ignore
/// use runact_security::{AccessMode, PermissionPolicy};
///
/// let policy = PermissionPolicy::new().access_mode(AccessMode::ReadOnly);
/// ```
///
/// Or load it from JSON:
///
/// ```json
/// {
///   "access_mode": "ReadWrite",
///   "default_grants": {"modify": true, "delete": false, "move": false},
///   "workspaces": {"7": {"modify": true, "delete": true, "move": true}}
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionPolicy {
    #[serde(default)]
    pub access_mode: AccessMode,
    #[serde(default)]
    pub default_grants: Grants,
    #[serde(default)]
    pub workspaces: HashMap<WorkspaceId, Grants>,
}

impl PermissionPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn access_mode(mut self, mode: AccessMode) -> Self {
        self.access_mode = mode;
        self
    }

    pub fn default_grants(mut self, grants: Grants) -> Self {
        self.default_grants = grants;
        self
    }

    /// Override grants for one workspace.
    pub fn workspace(mut self, id: WorkspaceId, grants: Grants) -> Self {
        self.workspaces.insert(id, grants);
        self
    }

    /// Parse and validate a JSON policy.
    pub fn from_json_str(json: &str) -> Result<Self, PolicyError> {
        let policy: Self = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| PolicyError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Reject configurations whose settings contradict each other.
    ///
    /// Workspace overrides cannot take effect under `ReadOnly`.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.access_mode == AccessMode::ReadOnly && !self.workspaces.is_empty() {
            return Err(PolicyError::Invalid(format!(
                "read-only policy has {} workspace override(s)",
                self.workspaces.len()
            )));
        }
        Ok(())
    }

    /// Effective grants for a workspace, ignoring access mode.
    pub fn grants_for(&self, id: WorkspaceId) -> Grants {
        self.workspaces.get(&id).copied().unwrap_or(self.default_grants)
    }

    fn effective(&self, id: WorkspaceId) -> Grants {
        match self.access_mode {
            AccessMode::ReadWrite => self.grants_for(id),
            AccessMode::ReadOnly => {
                debug!(workspace_id = %id, "read-only policy, denying capability");
                Grants::none()
            }
        }
    }
}

impl CapabilitySet for PermissionPolicy {
    fn can_delete_run(&self, run: &Run) -> bool {
        self.effective(run.workspace_id).delete
    }

    fn can_move_run(&self, run: &Run) -> bool {
        self.effective(run.workspace_id).move_runs
    }

    fn can_modify_workspace(&self, workspace: &WorkspaceRef) -> bool {
        self.effective(workspace.id).modify
    }
}
