//! Run state classification tables
//!
//! Four named partitions of the [`RunState`] space, built once on first use
//! and shared read-only for the life of the process.
//!
//! | Set | Members |
//! |-----|---------|
//! | Terminal | Canceled, Completed, Error, Deleted, Deleting, DeleteFailed |
//! | Deletable | Canceled, Completed, Error, DeleteFailed |
//! | Killable | Active, Paused, StoppingCanceled, Queued, Pulling, Starting, Running |
//! | Pausable | Active, Queued, Pulling, Starting, Running |
//!
//! Sets may overlap. `Unspecified` is a member of none of them.

use crate::run_types::RunState;
use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

/// Immutable set of run states
#[derive(Debug, Clone)]
pub struct StateSet {
    name: &'static str,
    members: FxHashSet<RunState>,
}

impl StateSet {
    fn new(name: &'static str, states: &[RunState]) -> Self {
        StateSet {
            name,
            members: states.iter().copied().collect(),
        }
    }

    /// Membership test, O(1)
    pub fn contains(&self, state: RunState) -> bool {
        self.members.contains(&state)
    }

    /// Name of the set
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Members in `RunState` declaration order
    pub fn iter(&self) -> impl Iterator<Item = RunState> + '_ {
        RunState::ALL
            .iter()
            .copied()
            .filter(move |state| self.members.contains(state))
    }

    /// Number of member states
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// End states after which a run makes no further progress
pub static TERMINAL: Lazy<StateSet> = Lazy::new(|| {
    StateSet::new(
        "terminal",
        &[
            RunState::Canceled,
            RunState::Completed,
            RunState::Error,
            RunState::Deleted,
            RunState::Deleting,
            RunState::DeleteFailed,
        ],
    )
});

/// States from which permanent removal is safe
pub static DELETABLE: Lazy<StateSet> = Lazy::new(|| {
    StateSet::new(
        "deletable",
        &[
            RunState::Canceled,
            RunState::Completed,
            RunState::Error,
            RunState::DeleteFailed,
        ],
    )
});

/// States in which a forced stop is meaningful
pub static KILLABLE: Lazy<StateSet> = Lazy::new(|| {
    StateSet::new(
        "killable",
        &[
            RunState::Active,
            RunState::Paused,
            RunState::StoppingCanceled,
            RunState::Queued,
            RunState::Pulling,
            RunState::Starting,
            RunState::Running,
        ],
    )
});

/// States in which suspension is meaningful
pub static PAUSABLE: Lazy<StateSet> = Lazy::new(|| {
    StateSet::new(
        "pausable",
        &[
            RunState::Active,
            RunState::Queued,
            RunState::Pulling,
            RunState::Starting,
            RunState::Running,
        ],
    )
});

/// Named state classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateClass {
    /// See [`TERMINAL`]
    Terminal,
    /// See [`DELETABLE`]
    Deletable,
    /// See [`KILLABLE`]
    Killable,
    /// See [`PAUSABLE`]
    Pausable,
}

impl StateClass {
    /// Every class, in declaration order
    pub const ALL: [StateClass; 4] = [
        StateClass::Terminal,
        StateClass::Deletable,
        StateClass::Killable,
        StateClass::Pausable,
    ];

    /// The table backing this class
    pub fn set(self) -> &'static StateSet {
        match self {
            StateClass::Terminal => &*TERMINAL,
            StateClass::Deletable => &*DELETABLE,
            StateClass::Killable => &*KILLABLE,
            StateClass::Pausable => &*PAUSABLE,
        }
    }
}

/// Check whether `state` belongs to the given classification
pub fn in_set(class: StateClass, state: RunState) -> bool {
    class.set().contains(state)
}
