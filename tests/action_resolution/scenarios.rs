//! Worked resolution scenarios.

use crate::common::*;
use runact::prelude::*;
use runact::{can_action_run, resolve_actions, DELETABLE};

/// Completed, unarchived run with full capabilities: archive, plus delete
/// because Completed is deletable.
#[test]
fn test_completed_run_offers_archive_and_delete() {
    let r = run(RunState::Completed);
    let candidates = [RunAction::Archive, RunAction::Delete, RunAction::Kill];

    let expected = if DELETABLE.contains(RunState::Completed) {
        vec![RunAction::Archive, RunAction::Delete]
    } else {
        vec![RunAction::Archive]
    };
    assert_eq!(resolve(&r, &candidates), expected);
    assert_eq!(expected, vec![RunAction::Archive, RunAction::Delete]);
}

/// Paused multi-trial run: resume only, multi-trial experiments never pause.
#[test]
fn test_paused_multitrial_offers_resume_only() {
    let r = run(RunState::Paused).with_experiment(ExperimentInfo::multitrial());
    assert_eq!(
        resolve(&r, &[RunAction::Pause, RunAction::Resume]),
        vec![RunAction::Resume]
    );
}

/// Paused unmanaged run: resume is structurally eligible but gated out.
#[test]
fn test_paused_unmanaged_cannot_resume() {
    let r = run(RunState::Paused).with_experiment(ExperimentInfo::unmanaged());

    assert!(can_action_run(RunAction::Resume, &r));
    assert!(resolve(&r, &[RunAction::Resume]).is_empty());
}

/// One archived and one unarchived terminal run: each satisfies a different
/// action, so the union offers both.
#[test]
fn test_mixed_archival_selection_offers_both() {
    let runs = vec![
        Run::new(RunId(1), WorkspaceId(1), RunState::Completed).archived(true),
        Run::new(RunId(2), WorkspaceId(1), RunState::Error),
    ];
    let authorizer = Authorizer::unrestricted();
    assert_eq!(
        authorizer.actions_for_selection(&runs, &[RunAction::Archive, RunAction::Unarchive]),
        vec![RunAction::Archive, RunAction::Unarchive]
    );
}

/// Archived run in an archived project cannot move, whatever the caller holds.
#[test]
fn test_archived_parent_blocks_move() {
    let r = run(RunState::Completed).archived(true).parent_archived(true);
    assert!(resolve(&r, &[RunAction::Move]).is_empty());

    let only_parent = run(RunState::Completed).parent_archived(true);
    assert!(resolve(&only_parent, &[RunAction::Move]).is_empty());
}

#[test]
fn test_running_single_trial_full_menu() {
    let r = run(RunState::Running).with_experiment(ExperimentInfo::single_trial());
    assert_eq!(
        resolve(&r, &RunAction::ALL),
        vec![RunAction::Kill, RunAction::Move, RunAction::Pause]
    );
}

#[test]
fn test_paused_run_full_menu() {
    let r = run(RunState::Paused);
    assert_eq!(
        resolve(&r, &RunAction::ALL),
        vec![RunAction::Kill, RunAction::Move, RunAction::Resume]
    );
}

#[test]
fn test_archived_error_run_full_menu() {
    let r = run(RunState::Error).archived(true);
    assert_eq!(
        resolve(&r, &RunAction::ALL),
        vec![RunAction::Delete, RunAction::Unarchive]
    );
}

#[test]
fn test_deleting_run_cannot_be_deleted_again() {
    let r = run(RunState::Deleting);
    assert_eq!(
        resolve(&r, &RunAction::ALL),
        vec![RunAction::Archive, RunAction::Move]
    );
}

#[test]
fn test_workspace_denial_keeps_run_scoped_actions() {
    let caps = FixedCaps {
        delete: true,
        move_runs: true,
        modify: false,
    };
    let r = run(RunState::Completed);
    assert_eq!(
        resolve_actions(&r, &RunAction::ALL, &caps),
        vec![RunAction::Delete, RunAction::Move]
    );
}

fn resolve(r: &Run, candidates: &[RunAction]) -> Vec<RunAction> {
    resolve_actions(r, candidates, &AllowAll)
}
