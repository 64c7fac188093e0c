//! List endpoints tool definition.
//!
//! Lists the catalog grouped by category, optionally narrowed to one category.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::catalog::{Catalog, Category};
use crate::domains::tools::definitions::common::{error_result, success_result};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the list endpoints tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListEndpointsParams {
    /// Only list one category: auth, channels, messaging, users, groups or misc.
    #[serde(default)]
    pub category: Option<String>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// List endpoints tool - browse the Rocket.Chat endpoint catalog.
pub struct ListEndpointsTool;

impl ListEndpointsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_endpoints";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List the Rocket.Chat REST endpoints that can be exposed as MCP tools, grouped by category. Returns id, HTTP method, auth requirement and description for each.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(category = ?params.category))]
    pub fn execute(params: &ListEndpointsParams) -> CallToolResult {
        let catalog = Catalog::builtin();

        let categories = match params.category.as_deref() {
            Some(name) => match Category::parse(name) {
                Some(category) => vec![category],
                None => {
                    let valid: Vec<_> = Category::ALL.iter().map(|c| c.as_str()).collect();
                    return error_result(format!(
                        "Unknown category: {}. Valid categories: {}",
                        name,
                        valid.join(", ")
                    ));
                }
            },
            None => catalog.categories(),
        };

        let mut lines = Vec::new();
        let mut listed = 0;
        for category in categories {
            let endpoints: Vec<_> = catalog.by_category(category).collect();
            lines.push(format!(
                "{} [{}] ({})",
                category.label(),
                category,
                endpoints.len()
            ));
            for endpoint in &endpoints {
                lines.push(format!(
                    "  {:<6} {:<22} {}{}",
                    endpoint.method,
                    endpoint.id,
                    endpoint.description,
                    if endpoint.requires_auth { "" } else { " (no auth)" }
                ));
            }
            lines.push(String::new());
            listed += endpoints.len();
        }
        lines.push(format!("Total: {} of {} endpoints", listed, catalog.len()));

        info!("Listed {} endpoints", listed);
        success_result(lines.join("\n"))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        use crate::domains::tools::definitions::common::{http_params, http_response};

        let params: ListEndpointsParams = http_params(arguments)?;
        Ok(http_response(Self::execute(&params)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListEndpointsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some("List catalog endpoints".into()),
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: ListEndpointsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}
