pub mod list_endpoints;
pub mod list_profiles;

pub use list_endpoints::{ListEndpointsParams, ListEndpointsTool};
pub use list_profiles::{ListProfilesParams, ListProfilesTool};
