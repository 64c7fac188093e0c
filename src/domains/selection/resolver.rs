//! Resolves selection requests into concrete endpoint sequences.

use serde::Serialize;
use tracing::{debug, instrument};

use super::closure;
use super::error::SelectionError;
use super::request::{SelectionRequest, split_id_tokens};
use super::set::SelectionSet;
use crate::domains::catalog::{Catalog, Profile, ProfileEndpoints, profiles};

/// Label used when the request names the whole catalog directly.
pub const ENTIRE_CATALOG_LABEL: &str = "Entire catalog";

/// A resolved, closed selection plus how it should be presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    /// Profile display name, `"Entire catalog"`, or `"custom (id, ...)"`.
    pub label: String,
    pub selection: SelectionSet,
    /// Endpoint ids added by dependency closure.
    pub auto_included: Vec<&'static str>,
}

/// Pure resolver over a catalog and a profile table.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    catalog: &'a Catalog,
    profiles: &'a [Profile],
}

impl Resolver<'static> {
    /// Resolver over the built-in catalog and profiles.
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin(), profiles::builtin())
    }
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a Catalog, profiles: &'a [Profile]) -> Self {
        Self { catalog, profiles }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn profiles(&self) -> &'a [Profile] {
        self.profiles
    }

    /// Resolve a request without applying dependency closure.
    ///
    /// Repeated ids collapse onto their first occurrence.
    pub fn resolve(&self, request: &SelectionRequest) -> Result<SelectionSet, SelectionError> {
        match request {
            SelectionRequest::Explicit(raw) => self.resolve_ids(&split_id_tokens(raw)),
            SelectionRequest::NamedProfile(id) => self.resolve_profile(self.profile(id)?),
            SelectionRequest::EntireCatalog => Ok(self.entire_catalog()),
        }
    }

    /// Resolve a request and close it.
    ///
    /// Closure only runs on the explicit path; profiles are curated to be
    /// complete already.
    #[instrument(skip(self), level = "debug")]
    pub fn resolve_closed(&self, request: &SelectionRequest) -> Result<Resolution, SelectionError> {
        let resolution = match request {
            SelectionRequest::Explicit(raw) => {
                let ids = split_id_tokens(raw);
                let mut selection = self.resolve_ids(&ids)?;
                let auto_included = closure::close(&mut selection, self.catalog)?
                    .map(|e| vec![e.id])
                    .unwrap_or_default();
                Resolution {
                    label: format!("custom ({})", ids.join(", ")),
                    selection,
                    auto_included,
                }
            }
            SelectionRequest::NamedProfile(id) => {
                let profile = self.profile(id)?;
                Resolution {
                    label: profile.name.to_string(),
                    selection: self.resolve_profile(profile)?,
                    auto_included: Vec::new(),
                }
            }
            SelectionRequest::EntireCatalog => Resolution {
                label: ENTIRE_CATALOG_LABEL.to_string(),
                selection: self.entire_catalog(),
                auto_included: Vec::new(),
            },
        };

        debug!(
            label = %resolution.label,
            tools = resolution.selection.len(),
            "Resolved selection"
        );
        Ok(resolution)
    }

    /// Resolve one preset profile, in its declared order.
    pub fn resolve_profile(&self, profile: &Profile) -> Result<SelectionSet, SelectionError> {
        match profile.endpoints {
            ProfileEndpoints::EntireCatalog => Ok(self.entire_catalog()),
            ProfileEndpoints::Listed(ids) => {
                let mut selection = SelectionSet::new();
                for id in ids {
                    let endpoint = self.catalog.get(id).ok_or_else(|| {
                        SelectionError::ProfileReferencesUnknownEndpoint {
                            profile: profile.id.to_string(),
                            id: id.to_string(),
                        }
                    })?;
                    selection.push(endpoint);
                }
                Ok(selection)
            }
        }
    }

    fn resolve_ids(&self, ids: &[String]) -> Result<SelectionSet, SelectionError> {
        let mut selection = SelectionSet::new();
        for id in ids {
            let endpoint = self
                .catalog
                .get(id)
                .ok_or_else(|| SelectionError::UnknownEndpoint { id: id.clone() })?;
            selection.push(endpoint);
        }
        Ok(selection)
    }

    fn profile(&self, id: &str) -> Result<&'a Profile, SelectionError> {
        profiles::find(self.profiles, id.trim()).ok_or_else(|| SelectionError::UnknownProfile {
            id: id.to_string(),
            available: profiles::ids(self.profiles)
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
    }

    fn entire_catalog(&self) -> SelectionSet {
        self.catalog.endpoints().iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::{Category, Endpoint, Method};

    fn explicit(ids: &[&str]) -> SelectionRequest {
        SelectionRequest::Explicit(ids.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_every_profile_resolves_to_its_declared_ids() {
        let resolver = Resolver::builtin();
        for profile in resolver.profiles() {
            let request = SelectionRequest::NamedProfile(profile.id.to_string());
            let ids = resolver.resolve(&request).unwrap().ids();
            match profile.endpoints {
                ProfileEndpoints::Listed(declared) => assert_eq!(ids, declared),
                ProfileEndpoints::EntireCatalog => {
                    assert_eq!(ids, resolver.catalog().ids().collect::<Vec<_>>())
                }
            }
        }
    }

    #[test]
    fn test_profile_is_unchanged_by_closure() {
        let resolver = Resolver::builtin();
        let request = SelectionRequest::NamedProfile("readonly".to_string());
        let plain = resolver.resolve(&request).unwrap();
        let mut closed = plain.clone();
        closure::close(&mut closed, resolver.catalog()).unwrap();

        assert_eq!(plain.len(), 8);
        assert!(plain.contains("login"));
        assert_eq!(plain, closed);

        let resolution = resolver.resolve_closed(&request).unwrap();
        assert_eq!(resolution.label, "Read-Only Observer");
        assert!(resolution.auto_included.is_empty());
    }

    #[test]
    fn test_explicit_request_is_closed() {
        static SCENARIO: &[Endpoint] = &[
            Endpoint {
                id: "login",
                method: Method::Post,
                path: "/api/v1/login",
                description: "Authenticate.",
                category: Category::Auth,
                requires_auth: false,
                parameters: &[],
            },
            Endpoint {
                id: "channels.list",
                method: Method::Get,
                path: "/api/v1/channels.list",
                description: "List channels.",
                category: Category::Channels,
                requires_auth: true,
                parameters: &[],
            },
        ];
        let catalog = Catalog::new(SCENARIO).unwrap();
        let resolver = Resolver::new(&catalog, &[]);

        let resolution = resolver.resolve_closed(&explicit(&["channels.list"])).unwrap();

        assert_eq!(resolution.selection.ids(), vec!["login", "channels.list"]);
        assert_eq!(resolution.auto_included, vec!["login"]);
        assert_eq!(resolution.label, "custom (channels.list)");
    }

    #[test]
    fn test_explicit_ids_split_and_dedupe() {
        let resolver = Resolver::builtin();
        let request = explicit(&["chat.search, me", "me", " "]);
        let selection = resolver.resolve(&request).unwrap();
        assert_eq!(selection.ids(), vec!["chat.search", "me"]);
    }

    #[test]
    fn test_unknown_endpoint_fails() {
        let resolver = Resolver::builtin();
        let err = resolver
            .resolve_closed(&explicit(&["me", "chat.react"]))
            .unwrap_err();
        assert_eq!(
            err,
            SelectionError::UnknownEndpoint {
                id: "chat.react".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_profile_lists_available() {
        let resolver = Resolver::builtin();
        let err = resolver
            .resolve(&SelectionRequest::NamedProfile("ops".to_string()))
            .unwrap_err();
        match err {
            SelectionError::UnknownProfile { id, available } => {
                assert_eq!(id, "ops");
                assert_eq!(available, vec!["messaging", "channels", "admin", "readonly", "full"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_broken_profile_fails_loudly() {
        static BROKEN: &[Profile] = &[Profile {
            id: "broken",
            name: "Broken",
            description: "",
            endpoints: ProfileEndpoints::Listed(&["login", "rooms.nope"]),
        }];
        let resolver = Resolver::new(Catalog::builtin(), BROKEN);
        assert_eq!(
            resolver.resolve(&SelectionRequest::NamedProfile("broken".to_string())),
            Err(SelectionError::ProfileReferencesUnknownEndpoint {
                profile: "broken".to_string(),
                id: "rooms.nope".to_string(),
            })
        );
    }

    #[test]
    fn test_entire_catalog_request() {
        let resolver = Resolver::builtin();
        let resolution = resolver
            .resolve_closed(&SelectionRequest::EntireCatalog)
            .unwrap();
        assert_eq!(resolution.selection.len(), 31);
        assert_eq!(resolution.label, ENTIRE_CATALOG_LABEL);
    }

    #[test]
    fn test_empty_explicit_request_resolves_empty() {
        let resolver = Resolver::builtin();
        let resolution = resolver.resolve_closed(&explicit(&[])).unwrap();
        assert!(resolution.selection.is_empty());
        assert!(resolution.auto_included.is_empty());
    }
}
