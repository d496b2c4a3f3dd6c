//! Resolution through a configured permission policy.

use crate::common::*;
use runact::prelude::*;

fn selection() -> Vec<Run> {
    vec![
        Run::new(RunId(1), WorkspaceId(1), RunState::Completed),
        Run::new(RunId(2), WorkspaceId(2), RunState::Running),
    ]
}

#[test]
fn test_read_only_policy_offers_nothing() {
    let authorizer = Authorizer::new(PermissionPolicy::new().access_mode(AccessMode::ReadOnly));
    assert!(authorizer
        .actions_for_selection(&selection(), &RunAction::ALL)
        .is_empty());
}

#[test]
fn test_per_workspace_grants() {
    let policy = PermissionPolicy::new()
        .default_grants(Grants::none())
        .workspace(WorkspaceId(2), Grants::modify_only());
    let authorizer = Authorizer::new(policy);

    // Workspace 1 grants nothing; workspace 2 can modify its running run.
    assert_eq!(
        authorizer.actions_for_selection(&selection(), &RunAction::ALL),
        vec![RunAction::Kill, RunAction::Pause]
    );
}

#[test]
fn test_policy_loaded_from_json() {
    let policy = PermissionPolicy::from_json_str(
        r#"{"default_grants": {"modify": false, "delete": true, "move": false}}"#,
    )
    .unwrap();
    let authorizer = Authorizer::new(policy);

    assert_eq!(
        authorizer.actions_for(&run(RunState::Completed), &RunAction::ALL),
        vec![RunAction::Delete]
    );
}

#[test]
fn test_policy_file_errors_surface() {
    let err = Authorizer::from_policy_file("/nowhere/policy.json").unwrap_err();
    assert_eq!(err.error_code(), "Io");
}
