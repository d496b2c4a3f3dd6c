//! runact CLI: resolve valid run management actions from the command line.
//!
//! Subcommands:
//! - `resolve`: load runs (and optionally a policy) from JSON, print actions
//! - `actions`: list the closed action set
//! - `states`: print the state classification tables
//!
//! Logging goes to stderr and is controlled with `RUST_LOG` (default `warn`).

mod commands;
mod format;
mod input;

use std::path::Path;
use std::process;

use anyhow::Result;
use clap::ArgMatches;
use runact_core::{parse_actions, RunAction};
use runact_engine::{resolve_actions, resolve_actions_union};
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_action_list, format_actions, format_error, format_per_run, format_states, OutputMode};
use input::{load_policy, load_runs};

fn main() {
    init_tracing();

    let matches = build_cli().get_matches();

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else if matches.get_flag("raw") {
        OutputMode::Raw
    } else {
        OutputMode::Human
    };

    match run(&matches, output_mode) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, output_mode));
            process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &ArgMatches, mode: OutputMode) -> Result<String> {
    match matches.subcommand() {
        Some(("resolve", sub)) => run_resolve(sub, mode),
        Some(("actions", _)) => Ok(format_action_list(mode)),
        Some(("states", _)) => Ok(format_states(mode)),
        Some((other, _)) => anyhow::bail!("unknown command: {}", other),
        None => anyhow::bail!("no command provided"),
    }
}

fn run_resolve(matches: &ArgMatches, mode: OutputMode) -> Result<String> {
    // Validate candidates before touching the filesystem.
    let candidates = match matches.get_many::<String>("actions") {
        Some(names) => parse_actions(&names.collect::<Vec<_>>())?,
        None => RunAction::ALL.to_vec(),
    };

    let runs_path = matches
        .get_one::<String>("runs")
        .ok_or_else(|| anyhow::anyhow!("--runs is required"))?;
    let runs = load_runs(Path::new(runs_path))?;
    let policy = load_policy(matches.get_one::<String>("policy").map(Path::new))?;

    if matches.get_flag("per-run") {
        let results: Vec<_> = runs
            .iter()
            .map(|run| (run.id, resolve_actions(run, &candidates, &policy)))
            .collect();
        Ok(format_per_run(&results, mode))
    } else {
        let actions = resolve_actions_union(&runs, &candidates, &policy);
        Ok(format_actions(&actions, mode))
    }
}
