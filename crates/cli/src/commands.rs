//! Clap command tree.

use clap::{value_parser, Arg, ArgAction, Command};

/// Build the full `stratafs` command.
pub fn build_cli() -> Command {
    Command::new("stratafs")
        .about("Filesystem-backed key-value store")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("root")
                .long("root")
                .short('r')
                .value_name("PATH")
                .global(true)
                .help("Storage root directory (overrides the config file)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .global(true)
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("cache")
                .long("cache")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .global(true)
                .help("Enable a read cache holding up to N values"),
        )
        .arg(
            Arg::new("skip-unreadable")
                .long("skip-unreadable")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Leave unreadable files out of scans instead of failing"),
        )
        .subcommands(subcommands())
}

/// Subcommands shared by shell, REPL and pipe modes.
pub fn subcommands() -> Vec<Command> {
    vec![
        Command::new("put")
            .about("Store VALUE under KEY")
            .arg(Arg::new("key").required(true))
            .arg(Arg::new("value").required(true)),
        Command::new("get")
            .about("Print the value stored under KEY")
            .arg(Arg::new("key").required(true))
            .arg(
                Arg::new("cached")
                    .long("cached")
                    .action(ArgAction::SetTrue)
                    .help("Answer from the read cache when possible"),
            ),
        Command::new("del")
            .visible_alias("delete")
            .about("Remove KEY")
            .arg(Arg::new("key").required(true)),
        Command::new("scan")
            .about("List every entry under KEY (default: the whole store)")
            .arg(Arg::new("key")),
        Command::new("call")
            .about("Invoke a tool with raw JSON arguments")
            .arg(Arg::new("params").required(true))
            .arg(
                Arg::new("tool")
                    .long("tool")
                    .short('t')
                    .default_value(stratafs_executor::LOCAL_CACHE_TOOL),
            ),
        Command::new("tools").about("List registered tools"),
    ]
}

/// Command tree for a single REPL or pipe line.
pub fn build_line_cli() -> Command {
    Command::new("stratafs")
        .no_binary_name(true)
        .disable_version_flag(true)
        .subcommand_required(true)
        .subcommands(subcommands())
}
