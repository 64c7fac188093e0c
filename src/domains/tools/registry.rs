//! Tool Registry - central registration and dispatch for all tools.
//!
//! Provides tool names and metadata for listing, and HTTP dispatch for tool
//! calls when the `http` feature is enabled.

#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use super::context::ToolContext;
#[cfg(feature = "http")]
use super::error::ToolError;
use super::definitions::{
    BenchmarkSelectionTool, ListEndpointsTool, ListProfilesTool, RenderToolDefinitionsTool,
    ResolveSelectionTool,
};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    ctx: ToolContext,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            ListEndpointsTool::NAME,
            ListProfilesTool::NAME,
            ResolveSelectionTool::NAME,
            RenderToolDefinitionsTool::NAME,
            BenchmarkSelectionTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            ListEndpointsTool::to_tool(),
            ListProfilesTool::to_tool(),
            ResolveSelectionTool::to_tool(),
            RenderToolDefinitionsTool::to_tool(),
            BenchmarkSelectionTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        match name {
            ListEndpointsTool::NAME => ListEndpointsTool::http_handler(arguments),
            ListProfilesTool::NAME => ListProfilesTool::http_handler(arguments, &self.ctx),
            ResolveSelectionTool::NAME => ResolveSelectionTool::http_handler(arguments),
            RenderToolDefinitionsTool::NAME => RenderToolDefinitionsTool::http_handler(arguments),
            BenchmarkSelectionTool::NAME => {
                BenchmarkSelectionTool::http_handler(arguments, &self.ctx)
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::NotFound(name.to_string()).to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use std::sync::Arc;

    fn test_registry() -> ToolRegistry {
        ToolRegistry::new(ToolContext::from_config(Arc::new(Config::default())).unwrap())
    }

    #[test]
    fn test_registry_tool_names() {
        let names = test_registry().tool_names();
        assert_eq!(
            names,
            vec![
                "list_endpoints",
                "list_profiles",
                "resolve_selection",
                "render_tool_definitions",
                "benchmark_selection"
            ]
        );
    }

    #[test]
    fn test_tool_metadata_matches_names() {
        let registry = test_registry();
        let tools = ToolRegistry::get_all_tools();
        let names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(names, registry.tool_names());
        assert!(tools.iter().all(|t| t.description.is_some()));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_resolve() {
        let result = test_registry().call_tool(
            "resolve_selection",
            serde_json::json!({ "profile": "messaging" }),
        );
        assert_eq!(result.unwrap()["isError"], false);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_unknown() {
        let result = test_registry().call_tool("generate_server", serde_json::json!({}));
        assert!(result.is_err());
    }
}
