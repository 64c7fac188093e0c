//! Tools domain module.
//!
//! Tools expose the selection and benchmarking engine to MCP clients.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `context.rs` - Shared configuration and frozen token table
//! - `router.rs` - Dynamic ToolRouter builder for STDIO transport
//! - `registry.rs` - Central tool registry and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define params, execute(), and http_handler()
//! 3. Export in `definitions/mod.rs`
//! 4. Add route in `router.rs` using `with_route()`
//! 5. Register in `registry.rs` for HTTP support

mod context;
pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use context::ToolContext;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
