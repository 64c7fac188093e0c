//! Render tool definitions tool.
//!
//! Returns the canonical text each selected tool occupies in a model's
//! context. Generated servers must embed this text verbatim.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::{info, instrument};

use crate::domains::accounting::render_manifest;
use crate::domains::tools::definitions::common::{SelectionParams, error_result, success_result};

/// Render tool definitions tool - show the exact tool definition text.
pub struct RenderToolDefinitionsTool;

impl RenderToolDefinitionsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "render_tool_definitions";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Render the canonical tool definition text for a selection of endpoints: the exact text that is tokenized for cost figures and embedded in a generated server.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(profile = ?params.profile))]
    pub fn execute(params: &SelectionParams) -> CallToolResult {
        let resolution = match params.resolve() {
            Ok(resolution) => resolution,
            Err(e) => return error_result(e.to_string()),
        };

        info!("Rendering {} tool definitions", resolution.selection.len());
        success_result(render_manifest(&resolution.selection))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        use crate::domains::tools::definitions::common::{http_params, http_response};

        let params: SelectionParams = http_params(arguments)?;
        Ok(http_response(Self::execute(&params)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SelectionParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
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
                let params: SelectionParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::result_text;

    #[test]
    fn test_render_closed_selection() {
        let params = SelectionParams {
            apis: Some(vec!["info".to_string(), "me".to_string()]),
            profile: None,
        };
        let result = RenderToolDefinitionsTool::execute(&params);
        let text = result_text(&result);

        assert!(text.starts_with("Tool: login\n"));
        assert!(text.contains("\n\nTool: info\n"));
        assert!(text.contains("\n\nTool: me\n"));
        assert!(text.contains("  RequiresAuth: true"));
    }

    #[test]
    fn test_render_unknown_profile() {
        let params = SelectionParams {
            apis: None,
            profile: Some("everything".to_string()),
        };
        let result = RenderToolDefinitionsTool::execute(&params);
        assert!(result.is_error.unwrap_or(false));
    }
}
