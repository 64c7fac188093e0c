//! Preset profile resource.

use serde::Serialize;

use super::ResourceDefinition;
use crate::domains::resources::error::ResourceError;
use crate::domains::selection::Resolver;

/// Built-in profiles with their endpoint lists fully resolved.
pub struct ProfilesResource;

#[derive(Debug, Serialize)]
struct ResolvedProfile {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    endpoints: Vec<&'static str>,
}

impl ResourceDefinition for ProfilesResource {
    const URI: &'static str = "catalog://profiles";
    const NAME: &'static str = "Preset Profiles";
    const DESCRIPTION: &'static str =
        "Curated endpoint subsets for common agent workflows, with resolved ids";
    const MIME_TYPE: &'static str = "application/json";

    fn read() -> Result<String, ResourceError> {
        let resolver = Resolver::builtin();
        let profiles = resolver
            .profiles()
            .iter()
            .map(|profile| -> Result<ResolvedProfile, ResourceError> {
                Ok(ResolvedProfile {
                    id: profile.id,
                    name: profile.name,
                    description: profile.description,
                    endpoints: resolver.resolve_profile(profile)?.ids(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(serde_json::to_string_pretty(&profiles)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_profile_is_expanded() {
        let json: serde_json::Value =
            serde_json::from_str(&ProfilesResource::read().unwrap()).unwrap();
        let profiles = json.as_array().unwrap();
        assert_eq!(profiles.len(), 5);
        assert_eq!(profiles[0]["id"], "messaging");
        assert_eq!(profiles[0]["endpoints"][0], "login");

        let full = profiles.iter().find(|p| p["id"] == "full").unwrap();
        assert_eq!(full["endpoints"].as_array().unwrap().len(), 31);
    }
}
