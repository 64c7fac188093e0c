//! Helpers shared across tool definitions.

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domains::selection::{Resolution, Resolver, SelectionError, SelectionRequest};

/// Which endpoints a tool call is about.
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct SelectionParams {
    /// Endpoint ids, e.g. ["chat.sendMessage", "chat.search"]. Comma-joined
    /// entries are split. Takes precedence over `profile`. `login` is added
    /// automatically when an authenticated endpoint is selected.
    #[serde(default)]
    pub apis: Option<Vec<String>>,

    /// Preset profile id: messaging, channels, admin, readonly or full.
    #[serde(default)]
    pub profile: Option<String>,
}

impl SelectionParams {
    /// Resolve and close the selection against the built-in catalog.
    pub fn resolve(&self) -> Result<Resolution, SelectionError> {
        let request = SelectionRequest::from_parts(self.apis.as_deref(), self.profile.as_deref())?;
        Resolver::builtin().resolve_closed(&request)
    }
}

/// Create an error result with a formatted message.
pub fn error_result(message: impl Into<String>) -> CallToolResult {
    let message = message.into();
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message)])
}

/// Create a success result with text content.
pub fn success_result(content: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content.into())])
}

/// Create a success result with pretty-printed JSON text content.
pub fn json_result<T: Serialize>(value: &T) -> CallToolResult {
    match serde_json::to_string_pretty(value) {
        Ok(json) => success_result(json),
        Err(e) => error_result(format!("Failed to serialize result: {}", e)),
    }
}

/// Wrap a tool result in the JSON shape the HTTP transport returns.
#[cfg(feature = "http")]
pub fn http_response(result: CallToolResult) -> serde_json::Value {
    serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    })
}

/// Deserialize HTTP call arguments into a params struct.
#[cfg(feature = "http")]
pub fn http_params<T: serde::de::DeserializeOwned>(
    arguments: serde_json::Value,
) -> Result<T, String> {
    let arguments = if arguments.is_null() {
        serde_json::json!({})
    } else {
        arguments
    };
    serde_json::from_value(arguments)
        .map_err(|e| crate::domains::tools::ToolError::InvalidArguments(e.to_string()).to_string())
}

#[cfg(test)]
pub(crate) fn result_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}
