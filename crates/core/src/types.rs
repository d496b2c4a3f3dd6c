//! Identifier types shared across the workspace
//!
//! This module defines the identifiers carried by run records:
//! - [`RunId`]: Unique identifier for a run
//! - [`ProjectId`]: Project (collection) that owns the run
//! - [`WorkspaceId`]: Workspace the run's project lives in
//! - [`WorkspaceRef`]: Minimal workspace context handed to capability checks

use serde::{Deserialize, Serialize};

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident($inner:ty)) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub $inner);

        impl $name {
            /// Get the raw numeric value
            pub fn get(&self) -> $inner {
                self.0
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                $name(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// Unique identifier for a run
    ///
    /// # Examples
    ///
    /// ```
    /// use runact_core::RunId;
    ///
    /// let id = RunId::from(42);
    /// assert_eq!(id.get(), 42);
    /// assert_eq!(id.to_string(), "42");
    /// ```
    RunId(u64)
);

numeric_id!(
    /// Identifier of the project that owns a run
    ProjectId(u32)
);

numeric_id!(
    /// Identifier of a workspace
    WorkspaceId(u32)
);

/// Minimal workspace context passed to workspace-scoped capability checks
///
/// Capability implementations only ever see the workspace identity, never the
/// run itself, for actions gated on workspace modification rights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkspaceRef {
    /// Workspace identifier
    pub id: WorkspaceId,
}

impl WorkspaceRef {
    /// Create a workspace reference
    pub fn new(id: WorkspaceId) -> Self {
        WorkspaceRef { id }
    }
}

impl From<WorkspaceId> for WorkspaceRef {
    fn from(id: WorkspaceId) -> Self {
        WorkspaceRef::new(id)
    }
}
