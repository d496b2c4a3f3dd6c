//! Action-name validation and malformed run handling.

use crate::common::*;
use runact::prelude::*;
use runact::{resolve_named_actions, resolve_named_actions_union};

#[test]
fn test_unknown_action_name_is_rejected() {
    let authorizer = Authorizer::unrestricted();
    let err = authorizer
        .actions_for_names(&run(RunState::Completed), &["archive", "defragment"])
        .unwrap_err();

    assert!(err.is_invalid_action());
    assert!(err.to_string().contains("defragment"));
}

#[test]
fn test_unknown_action_rejected_even_for_empty_selection() {
    let runs: Vec<Run> = Vec::new();
    let err = resolve_named_actions_union(&runs, &["defragment"], &AllowAll).unwrap_err();
    assert_eq!(err.error_code(), "InvalidAction");
}

#[test]
fn test_action_names_are_case_insensitive() {
    let resolved =
        resolve_named_actions(&run(RunState::Completed), &["Archive", "DELETE"], &AllowAll).unwrap();
    assert_eq!(resolved, vec![RunAction::Archive, RunAction::Delete]);
}

#[test]
fn test_unknown_state_from_wire_is_only_movable() {
    let json = r#"{"id": 3, "workspaceId": 1, "state": "STATE_FROM_THE_FUTURE"}"#;
    let r: Run = serde_json::from_str(json).unwrap();

    assert_eq!(r.state, RunState::Unspecified);
    assert_eq!(
        Authorizer::unrestricted().actions_for(&r, &RunAction::ALL),
        vec![RunAction::Move]
    );
}

#[test]
fn test_unknown_state_archived_run_offers_nothing() {
    let r = run(RunState::Unspecified).archived(true);
    assert!(Authorizer::unrestricted()
        .actions_for(&r, &RunAction::ALL)
        .is_empty());
}

#[test]
fn test_missing_experiment_treated_as_absent() {
    let json = r#"{"id": 4, "workspaceId": 1, "state": "RUNNING"}"#;
    let r: Run = serde_json::from_str(json).unwrap();

    let actions = Authorizer::unrestricted().actions_for(&r, &[RunAction::Pause, RunAction::Kill]);
    assert_eq!(actions, vec![RunAction::Pause, RunAction::Kill]);
}
