//! Tool interface.
//!
//! A [`Tool`] takes the raw argument text an agent produced and returns a
//! plain string for the agent to read. Tools are registered explicitly in a
//! [`ToolRegistry`](crate::ToolRegistry).

use serde::Serialize;

use crate::Result;

/// One argument a tool accepts, as advertised to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolParameter {
    /// Argument name
    pub name: &'static str,
    /// JSON type name
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// What the argument means
    pub description: &'static str,
    /// Whether every call must supply it
    pub required: bool,
}

/// A callable tool.
pub trait Tool: Send + Sync {
    /// Name the tool is registered and invoked under.
    fn name(&self) -> &str;

    /// One-line description for the caller.
    fn description(&self) -> &str;

    /// Accepted arguments.
    fn parameters(&self) -> &[ToolParameter];

    /// Run the tool on raw argument text.
    fn call(&self, params: &str) -> Result<String>;
}

/// Strip a Markdown code fence around `text`, if present.
///
/// Language models often wrap JSON arguments in a fenced block tagged
/// `json`, sometimes followed by prose. Only the body up to the first
/// closing fence is kept.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    match body.find("```") {
        Some(end) => body[..end].trim(),
        None => body.trim(),
    }
}
