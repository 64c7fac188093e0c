//! Benchmark selection tool definition.
//!
//! Compares the token cost of a selection with exposing the full catalog,
//! using the frozen token table.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::accounting::{BenchmarkReport, TokenSource, format_benchmark_table};
use crate::domains::tools::ToolContext;
use crate::domains::tools::definitions::common::{
    SelectionParams, error_result, json_result, success_result,
};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the benchmark selection tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct BenchmarkSelectionParams {
    #[serde(flatten)]
    pub selection: SelectionParams,

    /// Return the raw result as JSON instead of a text table.
    #[serde(default)]
    pub json: bool,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Benchmark selection tool - selected versus full token cost.
pub struct BenchmarkSelectionTool;

impl BenchmarkSelectionTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "benchmark_selection";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Compare the context-window token cost and estimated per-call price of a minimal tool selection (endpoint ids or a preset profile) against exposing every catalog endpoint.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(profile = ?params.selection.profile))]
    pub fn execute(params: &BenchmarkSelectionParams, ctx: &ToolContext) -> CallToolResult {
        let resolution = match params.selection.resolve() {
            Ok(resolution) => resolution,
            Err(e) => return error_result(e.to_string()),
        };

        let benchmarker = ctx.benchmarker();
        let result = benchmarker.compare(&resolution.selection);
        info!(
            "Benchmarked {}: {} of {} tokens, {}% saved",
            resolution.label, result.selected_tokens, result.full_tokens, result.saved_percent
        );

        if params.json {
            return json_result(&BenchmarkReport {
                label: &resolution.label,
                auto_included: &resolution.auto_included,
                token_source: benchmarker.source().source_name(),
                result: &result,
            });
        }

        let mut text = String::new();
        if !resolution.auto_included.is_empty() {
            text.push_str(&format!(
                "Auto-included {} (required for authenticated endpoints)\n",
                resolution.auto_included.join(", ")
            ));
        }
        text.push_str(&format_benchmark_table(&result, &resolution.label));
        success_result(text)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        ctx: &ToolContext,
    ) -> Result<serde_json::Value, String> {
        use crate::domains::tools::definitions::common::{http_params, http_response};

        let params: BenchmarkSelectionParams = http_params(arguments)?;
        Ok(http_response(Self::execute(&params, ctx)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<BenchmarkSelectionParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some("Benchmark token savings".into()),
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
                let params: BenchmarkSelectionParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &ctx))
            }
            .boxed()
        })
    }
}
