//! Resolve selection tool definition.
//!
//! Expands explicit ids or a profile into the closed endpoint list a
//! generated server would contain.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::{info, instrument};

use crate::domains::tools::definitions::common::{SelectionParams, error_result, json_result};

/// Resolve selection tool - expand a request into its closed endpoint set.
pub struct ResolveSelectionTool;

impl ResolveSelectionTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "resolve_selection";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Resolve endpoint ids or a preset profile into the exact, ordered list of endpoints a minimal server needs. Reports endpoints that were auto-included (e.g. login for authenticated calls).";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(profile = ?params.profile))]
    pub fn execute(params: &SelectionParams) -> CallToolResult {
        match params.resolve() {
            Ok(resolution) => {
                info!(
                    "Resolved {} endpoints for {}",
                    resolution.selection.len(),
                    resolution.label
                );
                json_result(&resolution)
            }
            Err(e) => error_result(e.to_string()),
        }
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

    fn params(apis: &[&str], profile: Option<&str>) -> SelectionParams {
        SelectionParams {
            apis: (!apis.is_empty()).then(|| apis.iter().map(|s| s.to_string()).collect()),
            profile: profile.map(str::to_string),
        }
    }

    #[test]
    fn test_resolve_explicit_ids() {
        let request = params(&["chat.sendMessage,chat.search"], None);
        let result = ResolveSelectionTool::execute(&request);
        assert!(!result.is_error.unwrap_or(false));

        let json: serde_json::Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(json["label"], "custom (chat.sendMessage, chat.search)");
        assert_eq!(json["autoIncluded"], serde_json::json!(["login"]));
        assert_eq!(json["selection"][0]["id"], "login");
        assert_eq!(json["selection"][2]["id"], "chat.search");
    }

    #[test]
    fn test_resolve_profile() {
        let result = ResolveSelectionTool::execute(&params(&[], Some("channels")));
        let json: serde_json::Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(json["label"], "Channel Management");
        assert_eq!(json["selection"].as_array().unwrap().len(), 9);
    }

    #[test]
    fn test_resolve_unknown_endpoint() {
        let result = ResolveSelectionTool::execute(&params(&["chat.react"], None));
        assert!(result.is_error.unwrap_or(false));
        let text = result_text(&result);
        assert!(text.contains("chat.react"));
        assert!(text.contains("rc-mcp-gen list"));
    }

    #[test]
    fn test_resolve_unknown_profile() {
        let result = ResolveSelectionTool::execute(&params(&[], Some("ops")));
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("messaging, channels, admin, readonly, full"));
    }

    #[test]
    fn test_resolve_nothing() {
        let result = ResolveSelectionTool::execute(&params(&[], None));
        assert!(result.is_error.unwrap_or(false));
    }
}
