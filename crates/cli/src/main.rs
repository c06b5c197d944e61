//! stratafs CLI: command-line access to a filesystem-backed key-value store.
//!
//! Three modes:
//! - **Shell mode**: `stratafs [flags] COMMAND`: single command, exit
//! - **REPL mode**: `stratafs [flags]`: interactive prompt (if stdin is TTY)
//! - **Pipe mode**: `echo "put k v" | stratafs`: line-by-line from stdin

mod commands;
mod parse;
mod repl;
mod state;

use std::io::IsTerminal;
use std::process;

use tracing_subscriber::EnvFilter;

use commands::build_cli;
use parse::matches_to_action;
use state::{resolve_config, SessionState};

fn main() {
    // Logs go to stderr so stdout carries only command output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();

    let matches = build_cli().get_matches();

    let state = match resolve_config(&matches).and_then(|config| SessionState::open(&config)) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(1);
        }
    };

    if matches.subcommand().is_some() {
        process::exit(run_shell_mode(&matches, &state));
    } else if std::io::stdin().is_terminal() {
        repl::run_repl(&state);
    } else {
        process::exit(repl::run_pipe(&state));
    }
}

fn run_shell_mode(matches: &clap::ArgMatches, state: &SessionState) -> i32 {
    let action = match matches_to_action(matches) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("(error) {}", e);
            return 1;
        }
    };
    match state.run(action) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            0
        }
        Err(e) => {
            eprintln!("(error) {}", e);
            1
        }
    }
}
