//! Tool registry.
//!
//! Tools are registered on an explicit [`ToolRegistry`] built at startup and
//! passed to whatever dispatches tool calls. There is no global registry.

use std::collections::BTreeMap;
use std::sync::Arc;

use stratafs_core::Error;

use crate::tool::Tool;
use crate::Result;

/// Name → tool map.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `tool` under its own name, returning any tool it replaced.
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Option<Arc<dyn Tool>> {
        self.tools.insert(tool.name().to_string(), tool)
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(String::as_str)
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Invoke the tool registered as `name`.
    pub fn call(&self, name: &str, params: &str) -> Result<String> {
        let tool = self.get(name).ok_or_else(|| Error::ToolNotFound {
            name: name.to_string(),
        })?;
        tool.call(params)
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tools.keys().collect::<Vec<_>>())
            .finish()
    }
}
