//! Selection domain module.
//!
//! Turns a caller's request (explicit ids, a profile, or the entire catalog)
//! into an ordered, duplicate-free and functionally closed endpoint sequence.
//! Every operation is a pure function over the static catalog tables.

pub mod closure;
mod error;
mod request;
mod resolver;
mod set;

pub use closure::AUTH_ENDPOINT_ID;
pub use error::SelectionError;
pub use request::{SelectionRequest, split_id_tokens};
pub use resolver::{ENTIRE_CATALOG_LABEL, Resolution, Resolver};
pub use set::SelectionSet;
