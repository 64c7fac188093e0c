//! Preset profiles: curated endpoint subsets for common agent task shapes.
//!
//! Curated profiles are expected to be closed already, i.e. to list `login`
//! whenever they list an authenticated endpoint.

use serde::Serialize;
use std::collections::HashSet;

use super::error::CatalogError;
use super::index::Catalog;

/// Which endpoints a profile stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ProfileEndpoints {
    /// An explicit ordered id list.
    Listed(&'static [&'static str]),
    /// Every endpoint in the catalog, in catalog order.
    #[serde(serialize_with = "serialize_entire_catalog")]
    EntireCatalog,
}

fn serialize_entire_catalog<S: serde::Serializer>(serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str("all")
}

/// A named, curated grouping of endpoint ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub endpoints: ProfileEndpoints,
}

impl Profile {
    /// Number of tools this profile resolves to against `catalog`.
    pub fn tool_count(&self, catalog: &Catalog) -> usize {
        match self.endpoints {
            ProfileEndpoints::Listed(ids) => ids.len(),
            ProfileEndpoints::EntireCatalog => catalog.len(),
        }
    }

    pub fn is_entire_catalog(&self) -> bool {
        matches!(self.endpoints, ProfileEndpoints::EntireCatalog)
    }
}

/// Built-in profiles, in presentation order.
pub static PROFILES: &[Profile] = &[
    Profile {
        id: "messaging",
        name: "Messaging",
        description: "Send, read, and search messages in channels. Lean setup for chatbot workflows.",
        endpoints: ProfileEndpoints::Listed(&[
            "login",
            "me",
            "channels.list",
            "channels.history",
            "chat.sendMessage",
            "chat.postMessage",
            "chat.getMessage",
            "chat.search",
        ]),
    },
    Profile {
        id: "channels",
        name: "Channel Management",
        description: "Full channel lifecycle: list, create, join, leave, and read history.",
        endpoints: ProfileEndpoints::Listed(&[
            "login",
            "me",
            "channels.list",
            "channels.info",
            "channels.create",
            "channels.history",
            "channels.members",
            "channels.join",
            "channels.leave",
        ]),
    },
    Profile {
        id: "admin",
        name: "Admin & Users",
        description: "User management, server stats, and settings. For admin-facing agentic workflows.",
        endpoints: ProfileEndpoints::Listed(&[
            "login",
            "me",
            "users.info",
            "users.list",
            "users.create",
            "users.update",
            "users.setAvatar",
            "info",
            "statistics",
            "settings.public",
        ]),
    },
    Profile {
        id: "readonly",
        name: "Read-Only Observer",
        description: "Minimal read-only access: browse channels, read history, search messages. Zero writes.",
        endpoints: ProfileEndpoints::Listed(&[
            "login",
            "me",
            "channels.list",
            "channels.info",
            "channels.history",
            "channels.members",
            "chat.getMessage",
            "chat.search",
        ]),
    },
    Profile {
        id: "full",
        name: "Full Server",
        description: "Every catalog endpoint. Maximum capability, maximum token cost. Not recommended for agents.",
        endpoints: ProfileEndpoints::EntireCatalog,
    },
];

/// The built-in profile table.
pub fn builtin() -> &'static [Profile] {
    PROFILES
}

/// Look up a profile by id in `profiles`.
pub fn find<'a>(profiles: &'a [Profile], id: &str) -> Option<&'a Profile> {
    profiles.iter().find(|p| p.id == id)
}

/// Profile ids in table order.
pub fn ids(profiles: &[Profile]) -> Vec<&'static str> {
    profiles.iter().map(|p| p.id).collect()
}

/// Check that profile ids are unique and every listed endpoint exists.
pub fn validate_profiles(catalog: &Catalog, profiles: &[Profile]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for profile in profiles {
        if !seen.insert(profile.id) {
            return Err(CatalogError::DuplicateProfile(profile.id.to_string()));
        }
        if let ProfileEndpoints::Listed(ids) = profile.endpoints {
            if let Some(missing) = ids.iter().find(|id| !catalog.contains(id)) {
                return Err(CatalogError::UnknownProfileEndpoint {
                    profile: profile.id.to_string(),
                    endpoint: missing.to_string(),
                });
            }
        }
    }
    Ok(())
}
