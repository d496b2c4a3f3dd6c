//! Invariants that hold for every run, candidate list and capability set.

use crate::common::*;
use proptest::prelude::*;
use runact::{can_action_run, resolve_actions, resolve_actions_union, AllowAll, Run};

proptest! {
    /// An action is only ever offered when its structural precondition holds.
    #[test]
    fn prop_resolved_actions_are_eligible(r in arb_run(), action in arb_action(), caps in arb_caps()) {
        if resolve_actions(&r, &[action], &caps).contains(&action) {
            prop_assert!(can_action_run(action, &r));
        }
    }

    #[test]
    fn prop_empty_candidates_resolve_to_nothing(r in arb_run(), caps in arb_caps()) {
        prop_assert!(resolve_actions(&r, &[], &caps).is_empty());
    }

    #[test]
    fn prop_empty_selection_resolves_to_nothing(actions in arb_actions(), caps in arb_caps()) {
        let runs: Vec<Run> = Vec::new();
        prop_assert!(resolve_actions_union(&runs, &actions, &caps).is_empty());
    }

    /// Union over a single run is single-run resolution.
    #[test]
    fn prop_singleton_union_is_identity(r in arb_run(), actions in arb_actions(), caps in arb_caps()) {
        let single = resolve_actions(&r, &actions, &caps);
        let union = resolve_actions_union(&[r], &actions, &caps);
        prop_assert_eq!(single, union);
    }

    #[test]
    fn prop_single_run_output_is_subsequence(r in arb_run(), actions in arb_actions(), caps in arb_caps()) {
        let resolved = resolve_actions(&r, &actions, &caps);
        prop_assert!(is_subsequence(&resolved, &actions));
    }

    #[test]
    fn prop_union_output_is_subsequence(runs in arb_runs(), actions in arb_actions(), caps in arb_caps()) {
        let resolved = resolve_actions_union(&runs, &actions, &caps);
        prop_assert!(is_subsequence(&resolved, &actions));
    }

    /// Adding a run to a selection never removes an offered action.
    #[test]
    fn prop_union_is_monotonic(
        runs in arb_runs(),
        extra in arb_run(),
        actions in arb_actions(),
        caps in arb_caps(),
    ) {
        let before = resolve_actions_union(&runs, &actions, &caps);
        let mut grown = runs.clone();
        grown.push(extra);
        let after = resolve_actions_union(&grown, &actions, &caps);

        for action in &before {
            prop_assert!(after.contains(action), "{} dropped after adding a run", action);
        }
    }

    /// An action is in the union exactly when some member offers it.
    #[test]
    fn prop_union_matches_any_member(runs in arb_runs(), actions in arb_actions(), caps in arb_caps()) {
        let union = resolve_actions_union(&runs, &actions, &caps);
        for action in &actions {
            let any = runs.iter().any(|r| resolve_actions(r, &[*action], &caps).contains(action));
            prop_assert_eq!(union.contains(action), any, "{}", action);
        }
    }

    /// Capabilities only ever remove actions.
    #[test]
    fn prop_capabilities_never_add_actions(r in arb_run(), actions in arb_actions(), caps in arb_caps()) {
        let restricted = resolve_actions(&r, &actions, &caps);
        let unrestricted = resolve_actions(&r, &actions, &AllowAll);
        prop_assert!(is_subsequence(&restricted, &unrestricted));
    }

    #[test]
    fn prop_resolution_is_deterministic(r in arb_run(), actions in arb_actions(), caps in arb_caps()) {
        prop_assert_eq!(
            resolve_actions(&r, &actions, &caps),
            resolve_actions(&r, &actions, &caps)
        );
    }
}
