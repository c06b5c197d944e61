//! Interactive REPL and line-by-line pipe mode.

use std::io::BufRead;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::commands::build_line_cli;
use crate::parse::{check_meta_command, parse_line, MetaCommand};
use crate::state::SessionState;

const PROMPT: &str = "stratafs> ";

/// Run the interactive prompt until `quit` or EOF.
pub fn run_repl(state: &SessionState) {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("(error) failed to start line editor: {}", e);
            return;
        }
    };

    loop {
        let line = match rl.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("(error) {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(line.as_str());

        match check_meta_command(&line) {
            Some(MetaCommand::Quit) => break,
            Some(MetaCommand::Help) => {
                println!("{}", build_line_cli().render_help());
                continue;
            }
            None => {}
        }

        if let Err(msg) = run_line(state, &line) {
            eprintln!("(error) {}", msg);
        }
    }
}

/// Execute one command per stdin line. Returns the process exit code.
pub fn run_pipe(state: &SessionState) -> i32 {
    let stdin = std::io::stdin();
    let mut exit_code = 0;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("(error) {}", e);
                return 1;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Err(msg) = run_line(state, trimmed) {
            eprintln!("(error) {}", msg);
            exit_code = 1;
        }
    }
    exit_code
}

fn run_line(state: &SessionState, line: &str) -> Result<(), String> {
    let action = parse_line(line)?;
    let output = state.run(action).map_err(|e| e.to_string())?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
