//! Session state shared by all CLI modes.

use std::sync::Arc;

use stratafs_core::{Result, ScanPolicy, StoreConfig};
use stratafs_executor::{Executor, LocalCacheTool, ToolRegistry};
use stratafs_storage::FsKvStore;
use tracing::debug;

use crate::parse::CliAction;

/// The opened store and the tools that front it.
pub struct SessionState {
    executor: Executor,
    registry: ToolRegistry,
}

impl SessionState {
    /// Open the store described by `config` and register its tools.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        debug!(
            root = %config.storage_root_path.display(),
            cache_capacity = config.cache_capacity,
            "opening store"
        );
        let store = Arc::new(FsKvStore::open(config)?);
        let executor = Executor::new(store);

        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(LocalCacheTool::new(executor.clone())));

        Ok(Self { executor, registry })
    }

    /// Run one parsed action, returning the text to print.
    pub fn run(&self, action: CliAction) -> Result<String> {
        match action {
            CliAction::Execute(command) => Ok(self.executor.execute(command)?.to_string()),
            CliAction::Call { tool, params } => self.registry.call(&tool, &params),
            CliAction::ListTools => Ok(self.registry.names().collect::<Vec<_>>().join("\n")),
        }
    }
}

/// Layer configuration: defaults, then the config file, then flags.
pub fn resolve_config(matches: &clap::ArgMatches) -> Result<StoreConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => StoreConfig::load(path)?,
        None => StoreConfig::default(),
    };
    if let Some(root) = matches.get_one::<String>("root") {
        config.storage_root_path = root.into();
    }
    if let Some(capacity) = matches.get_one::<usize>("cache") {
        config.cache_capacity = *capacity;
    }
    if matches.get_flag("skip-unreadable") {
        config.scan_policy = ScanPolicy::Skip;
    }
    Ok(config)
}
