//! Frozen token table resource.

use super::ResourceDefinition;
use crate::domains::accounting::{LiveTokens, TokenSnapshot};
use crate::domains::catalog::Catalog;
use crate::domains::resources::error::ResourceError;

/// Per-endpoint token counts measured with the live pipeline, in the file
/// format other consumers load verbatim.
pub struct TokenSnapshotResource;

impl ResourceDefinition for TokenSnapshotResource {
    const URI: &'static str = "catalog://token-snapshot";
    const NAME: &'static str = "Token Snapshot";
    const DESCRIPTION: &'static str =
        "Per-endpoint tool definition token counts (cl100k_base), keyed by endpoint id";
    const MIME_TYPE: &'static str = "application/json";

    fn read() -> Result<String, ResourceError> {
        let snapshot = TokenSnapshot::capture(Catalog::builtin(), &LiveTokens::cl100k());
        Ok(snapshot.to_json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_bundled_table() {
        let exported = TokenSnapshot::from_json(&TokenSnapshotResource::read().unwrap()).unwrap();
        assert_eq!(exported, TokenSnapshot::bundled().unwrap());
    }
}
