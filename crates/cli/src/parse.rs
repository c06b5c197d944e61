//! ArgMatches → CliAction conversion.

use clap::ArgMatches;
use stratafs_executor::Command;

/// The result of parsing user input.
#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    /// A store command to execute.
    Execute(Command),
    /// Raw tool invocation.
    Call { tool: String, params: String },
    /// List registered tools.
    ListTools,
}

/// REPL meta-commands.
#[derive(Debug, PartialEq, Eq)]
pub enum MetaCommand {
    Help,
    Quit,
}

/// Check for REPL meta-commands before delegating to clap.
pub fn check_meta_command(line: &str) -> Option<MetaCommand> {
    match line.trim() {
        "quit" | "exit" => Some(MetaCommand::Quit),
        "help" => Some(MetaCommand::Help),
        _ => None,
    }
}

fn required(m: &ArgMatches, name: &str) -> Result<String, String> {
    m.get_one::<String>(name)
        .cloned()
        .ok_or_else(|| format!("Missing argument: {}", name))
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, m) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    let command = match sub_name {
        "put" => Command::Put {
            key: required(m, "key")?,
            value: required(m, "value")?,
        },
        "get" => Command::Get {
            key: required(m, "key")?,
            reload: !m.get_flag("cached"),
        },
        "del" => Command::Delete {
            key: required(m, "key")?,
        },
        "scan" => Command::Scan {
            key: m.get_one::<String>("key").cloned().unwrap_or_default(),
        },
        "call" => {
            return Ok(CliAction::Call {
                tool: required(m, "tool")?,
                params: required(m, "params")?,
            })
        }
        "tools" => return Ok(CliAction::ListTools),
        other => return Err(format!("Unknown command: {}", other)),
    };
    Ok(CliAction::Execute(command))
}

/// Split a REPL or pipe line and parse it.
pub fn parse_line(line: &str) -> Result<CliAction, String> {
    let words = shlex::split(line).ok_or_else(|| "Unbalanced quotes".to_string())?;
    let matches = crate::commands::build_line_cli()
        .try_get_matches_from(words)
        .map_err(|e| e.to_string().trim_end().to_string())?;
    matches_to_action(&matches)
}
