//! Resource Registry - central registration of all resources.
//!
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()`

use rmcp::model::{AnnotateAble, RawResource};

use super::definitions::{
    EndpointsResource, ProfilesResource, ResourceDefinition, TokenSnapshotResource,
};
use super::service::ResourceEntry;

fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        read: R::read,
    }
}

/// Get all registered resources, in listing order.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<EndpointsResource>(),
        build_resource::<ProfilesResource>(),
        build_resource::<TokenSnapshotResource>(),
    ]
}

/// Get the list of all resource URIs.
pub fn resource_uris() -> Vec<&'static str> {
    vec![
        EndpointsResource::URI,
        ProfilesResource::URI,
        TokenSnapshotResource::URI,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_matches_uri_list() {
        let uris: Vec<String> = get_all_resources()
            .iter()
            .map(|r| r.resource.raw.uri.clone())
            .collect();
        assert_eq!(uris, resource_uris());
    }

    #[test]
    fn test_resources_are_json() {
        for entry in get_all_resources() {
            assert_eq!(
                entry.resource.raw.mime_type.as_deref(),
                Some("application/json")
            );
        }
    }
}
