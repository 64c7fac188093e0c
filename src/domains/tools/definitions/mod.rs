//! Tool definitions module.
//!
//! One file per tool, grouped by the domain they expose.

pub mod benchmark;
pub mod catalog;
pub mod common;
pub mod selection;

pub use benchmark::{BenchmarkSelectionParams, BenchmarkSelectionTool};
pub use catalog::{ListEndpointsParams, ListEndpointsTool, ListProfilesParams, ListProfilesTool};
pub use common::SelectionParams;
pub use selection::{RenderToolDefinitionsTool, ResolveSelectionTool};
