//! List profiles tool definition.
//!
//! Shows every preset profile with its size and token cost against the
//! full catalog.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
#[cfg(feature = "http")]
use tracing::info;
use tracing::instrument;

use crate::domains::selection::Resolver;
use crate::domains::tools::ToolContext;
use crate::domains::tools::definitions::common::{error_result, json_result};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the list profiles tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListProfilesParams {}

/// One listed profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileListing {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub endpoints: Vec<&'static str>,
    pub tokens: usize,
    pub saved_percent: i64,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// List profiles tool - preset endpoint selections with their token cost.
pub struct ListProfilesTool;

impl ListProfilesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_profiles";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List preset profiles (curated endpoint selections for common agent tasks) with their endpoint ids, token cost and savings versus exposing the full catalog.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(_params: &ListProfilesParams, ctx: &ToolContext) -> CallToolResult {
        let resolver = Resolver::builtin();
        let benchmarker = ctx.benchmarker();

        let mut listings = Vec::new();
        for profile in resolver.profiles() {
            let selection = match resolver.resolve_profile(profile) {
                Ok(selection) => selection,
                Err(e) => return error_result(e.to_string()),
            };
            let result = benchmarker.compare(&selection);
            listings.push(ProfileListing {
                id: profile.id,
                name: profile.name,
                description: profile.description,
                endpoints: selection.ids(),
                tokens: result.selected_tokens,
                saved_percent: result.saved_percent,
            });
        }

        json_result(&listings)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        ctx: &ToolContext,
    ) -> Result<serde_json::Value, String> {
        use crate::domains::tools::definitions::common::{http_params, http_response};

        let params: ListProfilesParams = http_params(arguments)?;
        info!("List profiles tool (HTTP) called");
        Ok(http_response(Self::execute(&params, ctx)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListProfilesParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some("List preset profiles".into()),
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(ctx: ToolContext) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |call: ToolCallContext<'_, S>| {
            let args = call.arguments.clone().unwrap_or_default();
            let ctx = ctx.clone();
            async move {
                let params: ListProfilesParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &ctx))
            }
            .boxed()
        })
    }
}
