//! The `local_cache` tool: agent-facing access to the store.

use stratafs_core::Error;
use tracing::debug;

use crate::tool::{strip_code_fence, Tool, ToolParameter};
use crate::{Command, Executor, Result};

/// Name the tool registers under.
pub const LOCAL_CACHE_TOOL: &str = "local_cache";

const PARAMETERS: &[ToolParameter] = &[
    ToolParameter {
        name: "operate",
        kind: "string",
        description: "Operation to perform: one of put, get, delete, scan",
        required: true,
    },
    ToolParameter {
        name: "key",
        kind: "string",
        description: "Name of the entry; `/` separates directories. Required for put, get and delete",
        required: false,
    },
    ToolParameter {
        name: "value",
        kind: "string",
        description: "Content to store; only used by put",
        required: false,
    },
];

/// Local key-value storage exposed as a tool.
#[derive(Debug, Clone)]
pub struct LocalCacheTool {
    executor: Executor,
}

impl LocalCacheTool {
    /// Create the tool over an executor.
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }

    /// Parse raw argument text into a command.
    pub fn parse_request(params: &str) -> Result<Command> {
        let body = strip_code_fence(params);
        if body.is_empty() {
            return Err(Error::invalid_input("empty request"));
        }
        Ok(serde_json::from_str(body)?)
    }
}

impl Tool for LocalCacheTool {
    fn name(&self) -> &str {
        LOCAL_CACHE_TOOL
    }

    fn description(&self) -> &str {
        "Local file-backed storage: put, get, delete or scan text values by key"
    }

    fn parameters(&self) -> &[ToolParameter] {
        PARAMETERS
    }

    fn call(&self, params: &str) -> Result<String> {
        let command = Self::parse_request(params)?;
        let output = self.executor.execute(command)?;
        debug!(success = output.is_success(), "local_cache call");
        Ok(output.to_string())
    }
}
