//! rc-mcp-gen library
//!
//! Plans minimal Model Context Protocol tool sets for the Rocket.Chat REST
//! API and measures what they cost in a model's context window.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **catalog**: the endpoint table and preset profiles
//!   - **selection**: request resolution and the login closure
//!   - **accounting**: rendering, token counting, cost and the frozen table
//!   - **tools**: MCP tools exposing the engine to clients
//!   - **resources**: read-only catalog, profile and token table views
//!
//! # Example
//!
//! ```rust,no_run
//! use rc_mcp_gen::domains::accounting::{Benchmarker, LiveTokens, Pricing};
//! use rc_mcp_gen::domains::catalog::Catalog;
//! use rc_mcp_gen::domains::selection::{Resolver, SelectionRequest};
//!
//! fn main() -> anyhow::Result<()> {
//!     let request = SelectionRequest::NamedProfile("messaging".to_string());
//!     let resolution = Resolver::builtin().resolve_closed(&request)?;
//!     let benchmarker = Benchmarker::new(Catalog::builtin(), LiveTokens::cl100k(), Pricing::default());
//!     let result = benchmarker.compare(&resolution.selection);
//!     println!("{} tokens saved", result.saved_tokens);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use self::core::{Config, Error, McpServer, Result};
