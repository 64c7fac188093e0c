//! Canonical text rendering of tool definitions.
//!
//! The output is what a model sees for each tool, so it doubles as a file
//! format: token counts are only truthful if a generated server embeds this
//! text byte for byte. Nothing here may depend on time, locale or hash order.

use crate::domains::catalog::Endpoint;
use crate::domains::selection::SelectionSet;

/// Render one endpoint as its tool definition block.
///
/// ```text
/// Tool: chat.getMessage
///   Description: Retrieve a single message by its ID.
///   Method: GET /api/v1/chat.getMessage
///   RequiresAuth: true
///   Parameters:
///     - msgId (string, required): The message ID
/// ```
pub fn render_tool_definition(endpoint: &Endpoint) -> String {
    let mut lines = vec![
        format!("Tool: {}", endpoint.id),
        format!("  Description: {}", endpoint.description),
        format!("  Method: {} {}", endpoint.method, endpoint.path),
        format!("  RequiresAuth: {}", endpoint.requires_auth),
    ];

    if endpoint.parameters.is_empty() {
        lines.push("  Parameters: none".to_string());
    } else {
        lines.push("  Parameters:".to_string());
        lines.extend(endpoint.parameters.iter().map(|p| {
            format!(
                "    - {} ({}, {}): {}",
                p.name,
                p.param_type,
                if p.required { "required" } else { "optional" },
                p.description
            )
        }));
    }

    lines.join("\n")
}

/// Render every endpoint of a selection, separated by a blank line.
pub fn render_manifest(selection: &SelectionSet) -> String {
    selection
        .iter()
        .map(render_tool_definition)
        .collect::<Vec<_>>()
        .join("\n\n")
}
