//! Plain-text and summary views of benchmark results.

use serde::Serialize;

use super::benchmark::BenchmarkResult;
use super::cost::display_cost;

const METRIC: usize = 26;
const VALUE: usize = 11;
const SAVINGS: usize = 14;
const INNER: usize = METRIC + VALUE + VALUE + SAVINGS + 3;

/// Format an integer with comma thousands separators.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

fn rule(left: char, mid: char, right: char) -> String {
    let bar = |n: usize| "═".repeat(n);
    format!(
        "{left}{}{mid}{}{mid}{}{mid}{}{right}",
        bar(METRIC),
        bar(VALUE),
        bar(VALUE),
        bar(SAVINGS)
    )
}

fn banner(text: &str) -> String {
    format!("║{:<width$.width$}║", text, width = INNER)
}

/// Boxed comparison table followed by the per-tool breakdown.
pub fn format_benchmark_table(result: &BenchmarkResult, label: &str) -> String {
    let full_tokens = group_thousands(result.full_tokens as i64);
    let selected_tokens = group_thousands(result.selected_tokens as i64);
    let cost_metric = format!("Est. cost/call ({})", result.price_label);

    let mut lines = vec![
        String::new(),
        format!("╔{}╗", "═".repeat(INNER)),
        banner(&format!(
            "{:^width$}",
            "MCP SERVER TOKEN BENCHMARK: SELECTED vs FULL",
            width = INNER
        )),
        format!("╠{}╣", "═".repeat(INNER)),
        banner(&format!("  Profile: {label}")),
        rule('╠', '╦', '╣'),
        format!(
            "║ {:<24} ║ {:<9} ║ {:<9} ║ {:<12} ║",
            "Metric", "Full", "Selected", "Savings"
        ),
        rule('╠', '╬', '╣'),
        format!(
            "║ {:<24} ║ {:>7}   ║ {:>7}   ║ {:>5} fewer  ║",
            "Tool definitions",
            result.full_tool_count,
            result.selected_tool_count,
            result.full_tool_count as i64 - result.selected_tool_count as i64
        ),
        format!(
            "║ {:<24} ║ {:>7}   ║ {:>7}   ║ {:>4}% saved  ║",
            "Token count", full_tokens, selected_tokens, result.saved_percent
        ),
        format!(
            "║ {:<24.24} ║ ${:>8} ║ ${:>8} ║ ${:>8}    ║",
            cost_metric,
            display_cost(result.full_cost, 5).to_string(),
            display_cost(result.selected_cost, 5).to_string(),
            display_cost(result.saved_cost, 5).to_string()
        ),
        rule('╚', '╩', '╝'),
        String::new(),
        "Per-tool token breakdown (selected):".to_string(),
        "┌────────────────────────┬────────┐".to_string(),
        "│ Tool                   │ Tokens │".to_string(),
        "├────────────────────────┼────────┤".to_string(),
    ];
    lines.extend(
        result
            .details
            .iter()
            .map(|d| format!("│ {:<22} │ {:>6} │", d.endpoint_id, d.tokens)),
    );
    lines.push("└────────────────────────┴────────┘".to_string());
    lines.push(String::new());
    lines.push(format!(
        "Bottom line: the \"{label}\" selection saves {}% of tokens",
        result.saved_percent
    ));
    lines.push(format!(
        "compared to loading all {} tools, {} fewer tokens",
        result.full_tool_count,
        group_thousands(result.saved_tokens)
    ));
    lines.push("in the model context window per request.".to_string());
    lines.push(String::new());

    lines.join("\n")
}

/// JSON form of one benchmark run, as emitted by the CLI and the MCP tool.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkReport<'a> {
    pub label: &'a str,
    pub auto_included: &'a [&'static str],
    /// Where the per-endpoint counts came from.
    pub token_source: String,
    #[serde(flatten)]
    pub result: &'a BenchmarkResult,
}

/// One row of the all-profiles summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub profile: String,
    pub tools: usize,
    pub full_tools: usize,
    pub tokens: usize,
    pub full_tokens: usize,
    pub savings: String,
}

impl ProfileSummary {
    pub fn new(profile: impl Into<String>, result: &BenchmarkResult) -> Self {
        Self {
            profile: profile.into(),
            tools: result.selected_tool_count,
            full_tools: result.full_tool_count,
            tokens: result.selected_tokens,
            full_tokens: result.full_tokens,
            savings: format!("{}%", result.saved_percent),
        }
    }
}
