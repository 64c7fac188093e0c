//! `rc-mcp-gen benchmark` and `rc-mcp-gen benchmark-all`
//!
//! The CLI measures with the live tokenizer; the MCP tools report from the
//! frozen table, which `snapshot --check` keeps in agreement.

use anyhow::Result;
use tracing::info;

use rc_mcp_gen::core::Config;
use rc_mcp_gen::domains::accounting::{
    BenchmarkReport, Benchmarker, LiveTokens, ProfileSummary, TokenSource, format_benchmark_table,
};
use rc_mcp_gen::domains::catalog::Catalog;
use rc_mcp_gen::domains::selection::Resolver;

use super::SelectionArgs;

const DEFAULT_PROFILE: &str = "messaging";

fn live_benchmarker(config: &Config) -> Benchmarker<'static, LiveTokens> {
    Benchmarker::new(
        Catalog::builtin(),
        LiveTokens::cl100k(),
        config.pricing.clone(),
    )
}

pub fn run(config: &Config, selection: &SelectionArgs, json: bool) -> Result<()> {
    let resolution = selection.resolve(Some(DEFAULT_PROFILE))?;
    let benchmarker = live_benchmarker(config);
    let result = benchmarker.compare(&resolution.selection);

    if json {
        let report = BenchmarkReport {
            label: &resolution.label,
            auto_included: &resolution.auto_included,
            token_source: benchmarker.source().source_name(),
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", format_benchmark_table(&result, &resolution.label));
    }
    Ok(())
}

/// Benchmark every listed profile in turn. The entire-catalog profile is
/// skipped since it is the baseline itself.
pub fn run_all(config: &Config, json: bool) -> Result<()> {
    let resolver = Resolver::builtin();
    let benchmarker = live_benchmarker(config);

    let mut summary = Vec::new();
    for profile in resolver.profiles().iter().filter(|p| !p.is_entire_catalog()) {
        let selection = resolver.resolve_profile(profile)?;
        let result = benchmarker.compare(&selection);
        info!(profile = profile.id, saved = result.saved_percent, "Profile benchmarked");

        if !json {
            println!("{}", format_benchmark_table(&result, profile.name));
            println!("\n{}\n", "=".repeat(70));
        }
        summary.push(ProfileSummary::new(profile.name, &result));
    }

    if !json {
        println!("Summary:\n");
    }
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
