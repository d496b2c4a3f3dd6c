//! Run lifecycle types
//!
//! This module defines the run record the authorization engine reads.
//! Runs are owned and mutated by an external provider; the engine only
//! observes them.
//!
//! ## Design
//!
//! - `RunState`: Lifecycle stage of a run, including an `Unspecified` landing
//!   state for values this crate does not know about
//! - `Run`: Run record with archival flags and optional experiment metadata
//! - `ExperimentInfo`: Metadata present only for experiment-backed runs
//!
//! ## Wire Format
//!
//! States serialize as `SCREAMING_SNAKE_CASE` (`"ACTIVE"`, `"DELETE_FAILED"`).
//! Any unrecognised state string deserializes to [`RunState::Unspecified`]
//! instead of failing. Inside a [`Run`] the same holds for a null or
//! non-string state, so a single malformed record never poisons a batch.

use crate::types::{ProjectId, RunId, WorkspaceId, WorkspaceRef};
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Lifecycle state of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunState {
    /// Run is scheduled and making progress
    Active,
    /// Run is suspended and may be resumed
    Paused,
    /// Run is shutting down after a cancel request
    StoppingCanceled,
    /// Run is shutting down after a kill request
    StoppingKilled,
    /// Run is shutting down after finishing its work
    StoppingCompleted,
    /// Run is shutting down after an error
    StoppingError,
    /// Run was canceled
    Canceled,
    /// Run finished normally
    Completed,
    /// Run failed
    Error,
    /// Run has been deleted
    Deleted,
    /// Run deletion is in progress
    Deleting,
    /// Run deletion was attempted and failed
    DeleteFailed,
    /// Run is waiting for resources
    Queued,
    /// Run is pulling its environment image
    Pulling,
    /// Run's containers are starting
    Starting,
    /// Run's containers are running
    Running,
    /// State is missing or unknown
    #[default]
    #[serde(other)]
    Unspecified,
}

impl RunState {
    /// Every state, in declaration order
    pub const ALL: [RunState; 17] = [
        RunState::Active,
        RunState::Paused,
        RunState::StoppingCanceled,
        RunState::StoppingKilled,
        RunState::StoppingCompleted,
        RunState::StoppingError,
        RunState::Canceled,
        RunState::Completed,
        RunState::Error,
        RunState::Deleted,
        RunState::Deleting,
        RunState::DeleteFailed,
        RunState::Queued,
        RunState::Pulling,
        RunState::Starting,
        RunState::Running,
        RunState::Unspecified,
    ];

    /// Get the wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Active => "ACTIVE",
            RunState::Paused => "PAUSED",
            RunState::StoppingCanceled => "STOPPING_CANCELED",
            RunState::StoppingKilled => "STOPPING_KILLED",
            RunState::StoppingCompleted => "STOPPING_COMPLETED",
            RunState::StoppingError => "STOPPING_ERROR",
            RunState::Canceled => "CANCELED",
            RunState::Completed => "COMPLETED",
            RunState::Error => "ERROR",
            RunState::Deleted => "DELETED",
            RunState::Deleting => "DELETING",
            RunState::DeleteFailed => "DELETE_FAILED",
            RunState::Queued => "QUEUED",
            RunState::Pulling => "PULLING",
            RunState::Starting => "STARTING",
            RunState::Running => "RUNNING",
            RunState::Unspecified => "UNSPECIFIED",
        }
    }

    /// Parse a wire name, case-insensitively
    ///
    /// Unknown names map to `Unspecified` rather than failing.
    pub fn parse(name: &str) -> RunState {
        let name = name.trim();
        RunState::ALL
            .iter()
            .copied()
            .find(|state| state.as_str().eq_ignore_ascii_case(name))
            .unwrap_or(RunState::Unspecified)
    }

    /// Check if the state is the unknown/missing placeholder
    pub fn is_unspecified(&self) -> bool {
        matches!(self, RunState::Unspecified)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reads a run's `state` field, mapping anything that is not a known state
/// name (null, numbers, objects, unknown strings) to `Unspecified`
fn lenient_state<'de, D>(deserializer: D) -> Result<RunState, D::Error>
where
    D: Deserializer<'de>,
{
    struct StateVisitor;

    impl<'de> Visitor<'de> for StateVisitor {
        type Value = RunState;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a run state")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<RunState, E> {
            Ok(RunState::parse(v))
        }

        fn visit_bool<E: de::Error>(self, _: bool) -> Result<RunState, E> {
            Ok(RunState::Unspecified)
        }

        fn visit_i64<E: de::Error>(self, _: i64) -> Result<RunState, E> {
            Ok(RunState::Unspecified)
        }

        fn visit_u64<E: de::Error>(self, _: u64) -> Result<RunState, E> {
            Ok(RunState::Unspecified)
        }

        fn visit_f64<E: de::Error>(self, _: f64) -> Result<RunState, E> {
            Ok(RunState::Unspecified)
        }

        fn visit_unit<E: de::Error>(self) -> Result<RunState, E> {
            Ok(RunState::Unspecified)
        }

        fn visit_none<E: de::Error>(self) -> Result<RunState, E> {
            Ok(RunState::Unspecified)
        }

        fn visit_some<S: Deserializer<'de>>(self, deserializer: S) -> Result<RunState, S::Error> {
            deserializer.deserialize_any(self)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RunState, A::Error> {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(RunState::Unspecified)
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RunState, A::Error> {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(RunState::Unspecified)
        }
    }

    deserializer.deserialize_any(StateVisitor)
}

/// Metadata for runs backed by a supervised experiment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentInfo {
    /// Experiment drives more than one trial (e.g. a hyperparameter search)
    #[serde(default, alias = "isMultitrial")]
    pub is_multitrial: bool,
    /// Experiment lifecycle is not controlled by the scheduler
    #[serde(default)]
    pub unmanaged: bool,
}

impl ExperimentInfo {
    /// Single-trial, managed experiment
    pub fn single_trial() -> Self {
        ExperimentInfo::default()
    }

    /// Multi-trial, managed experiment
    pub fn multitrial() -> Self {
        ExperimentInfo {
            is_multitrial: true,
            unmanaged: false,
        }
    }

    /// Unmanaged experiment
    pub fn unmanaged() -> Self {
        ExperimentInfo {
            is_multitrial: false,
            unmanaged: true,
        }
    }
}

/// A run as observed by the authorization engine
///
/// `archived` and `parent_archived` are independent: an archived run may
/// live in a project that is not archived, and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// Run ID
    pub id: RunId,
    /// Owning project
    #[serde(default = "default_project", alias = "projectId")]
    pub project_id: ProjectId,
    /// Workspace of the owning project
    #[serde(alias = "workspaceId")]
    pub workspace_id: WorkspaceId,
    /// Current lifecycle state
    #[serde(default, deserialize_with = "lenient_state")]
    pub state: RunState,
    /// Run itself is archived
    #[serde(default)]
    pub archived: bool,
    /// Owning project is archived
    #[serde(default, alias = "parentArchived")]
    pub parent_archived: bool,
    /// Present only for experiment-backed runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experiment: Option<ExperimentInfo>,
}

fn default_project() -> ProjectId {
    ProjectId(0)
}

impl Run {
    /// Create an unarchived run with no experiment attached
    pub fn new(id: RunId, workspace_id: WorkspaceId, state: RunState) -> Self {
        Run {
            id,
            project_id: default_project(),
            workspace_id,
            state,
            archived: false,
            parent_archived: false,
            experiment: None,
        }
    }

    /// Set the owning project
    pub fn in_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = project_id;
        self
    }

    /// Set the run's own archived flag
    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    /// Set the owning project's archived flag
    pub fn parent_archived(mut self, parent_archived: bool) -> Self {
        self.parent_archived = parent_archived;
        self
    }

    /// Attach experiment metadata
    pub fn with_experiment(mut self, experiment: ExperimentInfo) -> Self {
        self.experiment = Some(experiment);
        self
    }

    /// Workspace context for workspace-scoped capability checks
    pub fn workspace(&self) -> WorkspaceRef {
        WorkspaceRef::new(self.workspace_id)
    }

    /// Backed by a multi-trial experiment (false when no experiment)
    pub fn is_multitrial(&self) -> bool {
        self.experiment.map_or(false, |e| e.is_multitrial)
    }

    /// Backed by an unmanaged experiment (false when no experiment)
    pub fn is_unmanaged(&self) -> bool {
        self.experiment.map_or(false, |e| e.unmanaged)
    }

    /// Either the run or its project is archived
    pub fn is_any_archived(&self) -> bool {
        self.archived || self.parent_archived
    }
}
