//! Clap command tree.

use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("runact")
        .about("Resolve which management actions are valid for a set of runs")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .conflicts_with("raw")
                .help("Emit JSON output"),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit bare values, one per line"),
        )
        .subcommand(
            Command::new("resolve")
                .about("Resolve actions for runs loaded from a JSON file")
                .arg(
                    Arg::new("runs")
                        .long("runs")
                        .short('r')
                        .required(true)
                        .value_name("FILE")
                        .help("JSON array of run records"),
                )
                .arg(
                    Arg::new("policy")
                        .long("policy")
                        .short('p')
                        .value_name("FILE")
                        .help("Permission policy (JSON); grants everything when omitted"),
                )
                .arg(
                    Arg::new("actions")
                        .long("actions")
                        .short('a')
                        .value_name("ACTION,...")
                        .value_delimiter(',')
                        .help("Candidate actions in display order; all actions when omitted"),
                )
                .arg(
                    Arg::new("per-run")
                        .long("per-run")
                        .action(ArgAction::SetTrue)
                        .help("Resolve each run separately instead of the selection union"),
                ),
        )
        .subcommand(Command::new("actions").about("List the known run actions"))
        .subcommand(Command::new("states").about("Show the run state classification tables"))
}
