//! Endpoint catalog resource.

use serde::Serialize;

use super::ResourceDefinition;
use crate::domains::catalog::{Catalog, Endpoint};
use crate::domains::resources::error::ResourceError;

/// The whole endpoint catalog as JSON, in catalog order.
pub struct EndpointsResource;

#[derive(Debug, Serialize)]
struct CatalogDocument {
    count: usize,
    endpoints: &'static [Endpoint],
}

impl ResourceDefinition for EndpointsResource {
    const URI: &'static str = "catalog://endpoints";
    const NAME: &'static str = "Endpoint Catalog";
    const DESCRIPTION: &'static str =
        "Every Rocket.Chat REST endpoint that can be exposed as an MCP tool";
    const MIME_TYPE: &'static str = "application/json";

    fn read() -> Result<String, ResourceError> {
        let catalog = Catalog::builtin();
        let document = CatalogDocument {
            count: catalog.len(),
            endpoints: catalog.endpoints(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}
