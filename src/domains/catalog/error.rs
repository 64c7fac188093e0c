//! Catalog authoring errors.

use thiserror::Error;

/// Defects in catalog or profile data, detected when a table is indexed or
/// validated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog declares no endpoints.
    #[error("catalog contains no endpoints")]
    Empty,

    /// An endpoint was declared with a blank id.
    #[error("encountered endpoint with no id")]
    EmptyId,

    /// Two endpoints share an id.
    #[error("duplicate endpoint id {0}")]
    DuplicateEndpoint(String),

    /// An endpoint declares the same parameter twice.
    #[error("endpoint {endpoint} declares parameter {parameter} more than once")]
    DuplicateParameter { endpoint: String, parameter: String },

    /// Two profiles share an id.
    #[error("duplicate profile id {0}")]
    DuplicateProfile(String),

    /// A profile lists an id that is not in the catalog.
    #[error("profile {profile} references unknown endpoint {endpoint}")]
    UnknownProfileEndpoint { profile: String, endpoint: String },
}
