//! rc-mcp-gen entry point
//!
//! Lists the Rocket.Chat endpoint catalog, resolves and renders tool
//! selections, benchmarks their token cost, maintains the frozen token table
//! and serves the same engine over MCP.
//!
//! # Usage
//!
//! ```bash
//! rc-mcp-gen list
//! rc-mcp-gen benchmark --profile readonly
//! rc-mcp-gen benchmark --apis chat.search,chat.getMessage --json
//! rc-mcp-gen benchmark-all
//! rc-mcp-gen render --apis channels.list
//! rc-mcp-gen snapshot --check
//! rc-mcp-gen serve
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{Level, debug};
use tracing_subscriber::{EnvFilter, fmt};

use rc_mcp_gen::core::{Config, LoggingConfig};

mod commands;

use commands::SelectionArgs;

#[derive(Parser)]
#[command(name = "rc-mcp-gen")]
#[command(author, version, about = "Pick only the Rocket.Chat API tools an agent needs and measure the token savings")]
struct Cli {
    /// Log level for stderr output (overrides MCP_LOG_LEVEL)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all endpoints by category, then the preset profiles
    List,
    /// Compare a selection's token cost with the full catalog
    Benchmark {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Benchmark every preset profile and print a summary
    BenchmarkAll {
        /// Print only the JSON summary
        #[arg(long)]
        json: bool,
    },
    /// Print the tool definition text a model would receive
    Render {
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Export or check the frozen per-endpoint token table
    Snapshot {
        /// Write the table to this file instead of stdout
        #[arg(short, long, conflicts_with = "check")]
        output: Option<PathBuf>,

        /// Verify the frozen table against the live tokenizer
        #[arg(long)]
        check: bool,
    },
    /// Run the MCP server on the configured transport
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging starts before the full configuration so its warnings are visible.
    let logging = LoggingConfig::from_env();
    init_logging(cli.log_level.as_deref().unwrap_or(&logging.level));

    let config = Config::from_env();
    debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::List => commands::list::run(),
        Commands::Benchmark { selection, json } => {
            commands::benchmark::run(&config, &selection, json)
        }
        Commands::BenchmarkAll { json } => commands::benchmark::run_all(&config, json),
        Commands::Render { selection } => commands::render::run(&selection),
        Commands::Snapshot { output, check } => {
            commands::snapshot::run(&config, output.as_deref(), check)
        }
        Commands::Serve => commands::serve::run(config).await,
    }
}

/// Initialize the logging subsystem. Output goes to stderr so stdout stays
/// clean for reports and STDIO MCP frames.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
