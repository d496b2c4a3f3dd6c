//! Output formatting for the three output modes.

use runact_core::{RunAction, RunId, StateClass};
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Raw,
}

fn join(actions: &[RunAction], sep: &str) -> String {
    actions
        .iter()
        .map(RunAction::as_str)
        .collect::<Vec<_>>()
        .join(sep)
}

/// Actions resolved for a whole selection.
pub fn format_actions(actions: &[RunAction], mode: OutputMode) -> String {
    match mode {
        OutputMode::Human if actions.is_empty() => "(no actions available)".to_string(),
        OutputMode::Human => join(actions, ", "),
        OutputMode::Raw => join(actions, "\n"),
        OutputMode::Json => json!({ "actions": actions }).to_string(),
    }
}

/// Actions resolved run by run.
pub fn format_per_run(results: &[(RunId, Vec<RunAction>)], mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => results
            .iter()
            .map(|(id, actions)| {
                if actions.is_empty() {
                    format!("run {}: (none)", id)
                } else {
                    format!("run {}: {}", id, join(actions, ", "))
                }
            })
            .collect::<Vec<_>>()
            .join("\n"),
        OutputMode::Raw => results
            .iter()
            .map(|(id, actions)| format!("{}\t{}", id, join(actions, ",")))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputMode::Json => {
            let runs: Vec<_> = results
                .iter()
                .map(|(id, actions)| json!({ "run_id": id, "actions": actions }))
                .collect();
            json!({ "runs": runs }).to_string()
        }
    }
}

/// The closed action set.
pub fn format_action_list(mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => json!({ "actions": RunAction::ALL }).to_string(),
        OutputMode::Human | OutputMode::Raw => join(&RunAction::ALL, "\n"),
    }
}

/// The state classification tables.
pub fn format_states(mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => {
            let mut map = serde_json::Map::new();
            for class in StateClass::ALL {
                let set = class.set();
                let members: Vec<_> = set.iter().collect();
                map.insert(set.name().to_string(), json!(members));
            }
            serde_json::Value::Object(map).to_string()
        }
        OutputMode::Human => StateClass::ALL
            .iter()
            .map(|class| {
                let set = class.set();
                let members: Vec<_> = set.iter().map(|s| s.as_str()).collect();
                format!("{:<10} {}", set.name(), members.join(" "))
            })
            .collect::<Vec<_>>()
            .join("\n"),
        OutputMode::Raw => StateClass::ALL
            .iter()
            .map(|class| {
                let set = class.set();
                let members: Vec<_> = set.iter().map(|s| s.as_str()).collect();
                format!("{}\t{}", set.name(), members.join(","))
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

pub fn format_error(err: &anyhow::Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => json!({ "error": format!("{:#}", err) }).to_string(),
        OutputMode::Human | OutputMode::Raw => format!("(error) {:#}", err),
    }
}
