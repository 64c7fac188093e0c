//! MCP Server implementation and lifecycle management.
//!
//! The server handler implements the MCP protocol by delegating to the tools
//! and resources domains.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! The ToolRouter is built in `domains/tools/router.rs`; HTTP calls are
//! dispatched through `ToolRegistry`. Adding a new tool does not require
//! modifying this file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result as CoreResult;
use crate::domains::{
    resources::{ResourceError, ResourceService},
    tools::{ToolContext, build_tool_router},
};

#[cfg(feature = "http")]
use crate::domains::tools::ToolRegistry;

pub(crate) const INSTRUCTIONS: &str = "Plans which Rocket.Chat REST endpoints to expose as MCP tools. \
Use list_endpoints and list_profiles to explore the catalog, resolve_selection to turn ids or \
a profile into a closed tool set (login is added when needed), render_tool_definitions to see \
the exact text a model would receive, and benchmark_selection to compare its token cost with \
the full catalog.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    config: Arc<Config>,

    /// Shared state for tools that report token cost.
    tool_context: ToolContext,

    resource_service: Arc<ResourceService>,

    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails when the configured token table cannot be loaded.
    pub fn new(config: Config) -> CoreResult<Self> {
        let config = Arc::new(config);
        let tool_context = ToolContext::from_config(config.clone())?;

        info!(name = %config.server.name, "Initializing MCP server");

        Ok(Self {
            tool_router: build_tool_router::<Self>(tool_context.clone()),
            resource_service: Arc::new(ResourceService::new()),
            tool_context,
            config,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let registry = ToolRegistry::new(self.tool_context.clone());
        registry.call_tool(name, arguments)
    }

    /// List all available resources (for HTTP transport).
    pub async fn list_resources(&self) -> Vec<serde_json::Value> {
        let resources = self.resource_service.list_resources().await;

        resources
            .into_iter()
            .map(|r| {
                serde_json::json!({
                    "uri": r.uri,
                    "name": r.name,
                    "description": r.description,
                    "mimeType": r.mime_type
                })
            })
            .collect()
    }

    /// Read a resource by URI (for HTTP transport).
    pub async fn read_resource(&self, uri: &str) -> Result<serde_json::Value, String> {
        match self.resource_service.read_resource(uri).await {
            Ok(result) => Ok(serde_json::json!({
                "contents": result.contents
            })),
            Err(e) => Err(e.to_string()),
        }
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| match e {
                ResourceError::NotFound(_) => McpError::resource_not_found(e.to_string(), None),
                other => McpError::internal_error(other.to_string(), None),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> McpServer {
        McpServer::new(Config::default()).unwrap()
    }

    #[test]
    fn test_server_identity() {
        let server = server();
        assert_eq!(server.name(), "rc-mcp-gen");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_info_advertises_tools_and_resources() {
        let info = server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.prompts.is_none());
    }

    #[test]
    fn test_list_tools() {
        let tools = server().list_tools();
        assert_eq!(tools.len(), 5);
        assert!(tools.iter().any(|t| t["name"] == "benchmark_selection"));
    }

    #[tokio::test]
    async fn test_read_unknown_resource() {
        let err = server()
            .read_resource("catalog://nope")
            .await
            .unwrap_err();
        assert!(err.contains("catalog://nope"));
    }

    #[test]
    fn test_missing_snapshot_fails_startup() {
        let mut config = Config::default();
        config.accounting.snapshot_path = Some("/nonexistent/token_counts.json".into());
        assert!(McpServer::new(config).is_err());
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_call_tool() {
        let result = server()
            .call_tool("resolve_selection", serde_json::json!({"apis": ["me"]}))
            .await
            .unwrap();
        assert_eq!(result["isError"], false);
    }
}
