//! The command executor.

use std::sync::Arc;

use stratafs_storage::FsKvStore;
use tracing::debug;

use crate::handlers::kv;
use crate::{Command, Output, Result};

/// Routes [`Command`]s to the store.
///
/// Cloning an executor is cheap; clones share the same store.
#[derive(Debug, Clone)]
pub struct Executor {
    store: Arc<FsKvStore>,
}

impl Executor {
    /// Create an executor over `store`.
    pub fn new(store: Arc<FsKvStore>) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<FsKvStore> {
        &self.store
    }

    /// Execute a single command.
    pub fn execute(&self, command: Command) -> Result<Output> {
        debug!(operate = command.name(), key = command.key(), "execute");
        match command {
            Command::Put { key, value } => kv::put(&self.store, key, value),
            Command::Get { key, reload } => kv::get(&self.store, key, reload),
            Command::Delete { key } => kv::delete(&self.store, key),
            Command::Scan { key } => kv::scan(&self.store, key),
        }
    }
}
