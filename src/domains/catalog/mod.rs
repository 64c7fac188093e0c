//! Catalog domain module.
//!
//! Holds the static endpoint catalog and the preset profile table. Both are
//! immutable process-wide data exposing read accessors only.
//!
//! ## Architecture
//!
//! - `model.rs` - Endpoint, parameter, method and category types
//! - `endpoints.rs` - The built-in endpoint table
//! - `index.rs` - Validated, id-indexed view over an endpoint table
//! - `profiles.rs` - Curated profiles and profile validation
//! - `error.rs` - Catalog authoring errors

mod endpoints;
mod error;
mod index;
mod model;
pub mod profiles;

pub use endpoints::ENDPOINTS;
pub use error::CatalogError;
pub use index::Catalog;
pub use model::{Category, Endpoint, Method, ParamType, Parameter};
pub use profiles::{PROFILES, Profile, ProfileEndpoints};
