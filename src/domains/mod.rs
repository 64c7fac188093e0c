//! Domains module containing business logic organized by bounded contexts.
//!
//! - **catalog**: the static endpoint catalog and preset profiles
//! - **selection**: request resolution and dependency closure
//! - **accounting**: canonical rendering, token counting, cost and benchmarks
//! - **tools**: MCP tools exposing the engine to interactive clients
//! - **resources**: read-only MCP resources (catalog, profiles, frozen table)

pub mod accounting;
pub mod catalog;
pub mod resources;
pub mod selection;
pub mod tools;
