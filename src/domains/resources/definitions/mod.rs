//! Resource definitions module.
//!
//! Each resource lives in its own file and implements `ResourceDefinition`:
//! static metadata plus a reader producing the current text.

mod endpoints;
mod profiles;
mod token_snapshot;

pub use endpoints::EndpointsResource;
pub use profiles::ProfilesResource;
pub use token_snapshot::TokenSnapshotResource;

use super::error::ResourceError;

/// Trait for resource definitions.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Produce the resource text.
    fn read() -> Result<String, ResourceError>;
}
