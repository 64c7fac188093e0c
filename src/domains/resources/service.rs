//! Resource service implementation.
//!
//! The ResourceService lists registered resources and reads them by URI.
//! Resources are defined in `definitions/` and registered via `registry.rs`.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use tracing::{debug, info};

use super::error::ResourceError;
use super::registry::get_all_resources;

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// Produces the current resource text.
    pub read: fn() -> Result<String, ResourceError>,
}

/// Service for listing and reading resources.
#[derive(Debug, Clone)]
pub struct ResourceService {
    resources: Vec<ResourceEntry>,
}

impl ResourceService {
    pub fn new() -> Self {
        let resources = get_all_resources();
        info!(count = resources.len(), "Initializing ResourceService");
        Self { resources }
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .iter()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .iter()
            .find(|entry| entry.resource.raw.uri == uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        debug!(uri, "Reading resource");
        let text = (entry.read)()?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }
}

impl Default for ResourceService {
    fn default() -> Self {
        Self::new()
    }
}
