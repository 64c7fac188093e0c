//! Accounting domain module.
//!
//! Renders endpoints into the exact text a model receives, counts its tokens
//! and compares a selection's cost with the full catalog.
//!
//! ## Architecture
//!
//! - `render.rs` - Canonical tool definition text
//! - `tokenizer.rs` - Tokenizer trait and the cl100k implementation
//! - `tokens.rs` - Token sources and additive tallies
//! - `cost.rs` - Pricing and savings arithmetic
//! - `benchmark.rs` - Full versus selected comparison
//! - `snapshot.rs` - Frozen per-endpoint token table
//! - `report.rs` - Text tables and summary rows

mod benchmark;
mod cost;
mod error;
pub mod render;
mod report;
mod snapshot;
mod tokenizer;
mod tokens;

pub use benchmark::{BenchmarkResult, Benchmarker};
pub use cost::{Pricing, Savings, display_cost, saved_percent};
pub use error::{AccountingError, SnapshotMismatch};
pub use render::{render_manifest, render_tool_definition};
pub use report::{BenchmarkReport, ProfileSummary, format_benchmark_table, group_thousands};
pub use snapshot::{SNAPSHOT_FALLBACK_TOKENS, TokenSnapshot};
pub use tokenizer::{Cl100kTokenizer, Tokenizer};
pub use tokens::{EndpointTokens, LiveTokens, TokenSource, TokenTally, tally};
