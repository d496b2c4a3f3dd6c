//! Shared fixtures and proptest strategies.

use proptest::prelude::*;
use runact::{CapabilitySet, ExperimentInfo, Run, RunAction, RunId, RunState, WorkspaceId, WorkspaceRef};

pub fn run(state: RunState) -> Run {
    Run::new(RunId(1), WorkspaceId(1), state)
}

/// Capability set with independently configurable answers.
#[derive(Debug, Clone, Copy)]
pub struct FixedCaps {
    pub delete: bool,
    pub move_runs: bool,
    pub modify: bool,
}

impl CapabilitySet for FixedCaps {
    fn can_delete_run(&self, _run: &Run) -> bool {
        self.delete
    }

    fn can_move_run(&self, _run: &Run) -> bool {
        self.move_runs
    }

    fn can_modify_workspace(&self, _workspace: &WorkspaceRef) -> bool {
        self.modify
    }
}

pub fn arb_state() -> impl Strategy<Value = RunState> {
    proptest::sample::select(RunState::ALL.to_vec())
}

pub fn arb_action() -> impl Strategy<Value = RunAction> {
    proptest::sample::select(RunAction::ALL.to_vec())
}

pub fn arb_actions() -> impl Strategy<Value = Vec<RunAction>> {
    proptest::collection::vec(arb_action(), 0..10)
}

pub fn arb_experiment() -> impl Strategy<Value = Option<ExperimentInfo>> {
    proptest::option::of((any::<bool>(), any::<bool>()).prop_map(|(is_multitrial, unmanaged)| {
        ExperimentInfo {
            is_multitrial,
            unmanaged,
        }
    }))
}

pub fn arb_run() -> impl Strategy<Value = Run> {
    (
        any::<u64>(),
        0u32..4,
        arb_state(),
        any::<bool>(),
        any::<bool>(),
        arb_experiment(),
    )
        .prop_map(|(id, ws, state, archived, parent_archived, experiment)| Run {
            experiment,
            ..Run::new(RunId(id), WorkspaceId(ws), state)
                .archived(archived)
                .parent_archived(parent_archived)
        })
}

pub fn arb_runs() -> impl Strategy<Value = Vec<Run>> {
    proptest::collection::vec(arb_run(), 0..8)
}

pub fn arb_caps() -> impl Strategy<Value = FixedCaps> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(delete, move_runs, modify)| FixedCaps {
        delete,
        move_runs,
        modify,
    })
}

/// True if `sub` appears in `seq` in order (not necessarily contiguously).
pub fn is_subsequence(sub: &[RunAction], seq: &[RunAction]) -> bool {
    let mut it = seq.iter();
    sub.iter().all(|a| it.any(|b| b == a))
}
