//! Loading runs and policies from disk.

use anyhow::{Context, Result};
use runact_core::Run;
use runact_security::PermissionPolicy;
use std::path::Path;
use tracing::{debug, warn};

/// Load a JSON array of run records.
pub fn load_runs(path: &Path) -> Result<Vec<Run>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read runs from {}", path.display()))?;
    let runs: Vec<Run> = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse runs in {}", path.display()))?;

    for run in runs.iter().filter(|r| r.state.is_unspecified()) {
        warn!(run_id = %run.id, "run has an unknown state; only Move can be offered");
    }
    debug!(count = runs.len(), path = %path.display(), "loaded runs");
    Ok(runs)
}

/// Load a permission policy, or grant everything when no path is given.
pub fn load_policy(path: Option<&Path>) -> Result<PermissionPolicy> {
    match path {
        Some(path) => PermissionPolicy::from_path(path)
            .with_context(|| format!("failed to load policy from {}", path.display())),
        None => Ok(PermissionPolicy::default()),
    }
}
