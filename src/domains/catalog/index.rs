//! Indexed, read-only view of an endpoint table.
//!
//! The index is strict about duplicates so a malformed table is rejected
//! before anything is resolved or measured against it.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use super::endpoints::ENDPOINTS;
use super::error::CatalogError;
use super::model::{Category, Endpoint};

/// An endpoint table plus a lookup index keyed by endpoint id.
#[derive(Debug)]
pub struct Catalog {
    endpoints: &'static [Endpoint],
    by_id: HashMap<&'static str, usize>,
}

impl Catalog {
    /// Validate and index an endpoint table.
    ///
    /// Rejects empty tables, blank ids, duplicate ids and duplicate
    /// parameter names within one endpoint.
    pub fn new(endpoints: &'static [Endpoint]) -> Result<Self, CatalogError> {
        if endpoints.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut by_id = HashMap::with_capacity(endpoints.len());
        for (position, endpoint) in endpoints.iter().enumerate() {
            if endpoint.id.trim().is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if by_id.insert(endpoint.id, position).is_some() {
                return Err(CatalogError::DuplicateEndpoint(endpoint.id.to_string()));
            }

            let mut names = HashSet::new();
            for parameter in endpoint.parameters {
                if !names.insert(parameter.name) {
                    return Err(CatalogError::DuplicateParameter {
                        endpoint: endpoint.id.to_string(),
                        parameter: parameter.name.to_string(),
                    });
                }
            }
        }

        Ok(Self { endpoints, by_id })
    }

    /// The process-wide built-in catalog.
    ///
    /// Validated and indexed on first use, never mutated afterwards.
    ///
    /// # Panics
    ///
    /// Panics if the built-in endpoint table is malformed.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
            Catalog::new(ENDPOINTS)
                .unwrap_or_else(|e| panic!("built-in endpoint table is invalid: {e}"))
        });
        &BUILTIN
    }

    /// Resolve an endpoint by id.
    pub fn get(&self, id: &str) -> Option<&'static Endpoint> {
        let endpoints = self.endpoints;
        self.by_id.get(id).map(|&position| &endpoints[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// All endpoints in catalog-declared order.
    pub fn endpoints(&self) -> &'static [Endpoint] {
        self.endpoints
    }

    /// All ids in catalog-declared order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> {
        self.endpoints.iter().map(|e| e.id)
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Endpoints of one category, in catalog order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &'static Endpoint> {
        self.endpoints.iter().filter(move |e| e.category == category)
    }

    /// Categories that have at least one endpoint, in order of first appearance.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for endpoint in self.endpoints {
            if !seen.contains(&endpoint.category) {
                seen.push(endpoint.category);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::model::{Method, ParamType, Parameter};

    const fn endpoint(id: &'static str, parameters: &'static [Parameter]) -> Endpoint {
        Endpoint {
            id,
            method: Method::Get,
            path: "/api/v1/test",
            description: "Test endpoint.",
            category: Category::Misc,
            requires_auth: false,
            parameters,
        }
    }

    #[test]
    fn test_builtin_catalog_validates() {
        let catalog = Catalog::new(ENDPOINTS).unwrap();
        assert_eq!(catalog.len(), 31);
        assert_eq!(Catalog::builtin().len(), catalog.len());
    }

    #[test]
    fn test_builtin_index_covers_every_id() {
        let catalog = Catalog::builtin();
        for (position, endpoint) in ENDPOINTS.iter().enumerate() {
            assert!(std::ptr::eq(catalog.get(endpoint.id).unwrap(), &ENDPOINTS[position]));
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::builtin();
        let login = catalog.get("login").unwrap();
        assert_eq!(login.method, Method::Post);
        assert!(!login.requires_auth);
        assert!(catalog.contains("chat.search"));
        assert!(catalog.get("chat.nope").is_none());
    }

    #[test]
    fn test_ids_keep_catalog_order() {
        let ids: Vec<_> = Catalog::builtin().ids().take(4).collect();
        assert_eq!(ids, vec!["login", "logout", "me", "channels.list"]);
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        assert_eq!(
            Catalog::builtin().categories(),
            vec![
                Category::Auth,
                Category::Channels,
                Category::Messaging,
                Category::Users,
                Category::Groups,
                Category::Misc,
            ]
        );
    }

    #[test]
    fn test_by_category() {
        let groups: Vec<_> = Catalog::builtin()
            .by_category(Category::Groups)
            .map(|e| e.id)
            .collect();
        assert_eq!(
            groups,
            vec![
                "groups.list",
                "groups.create",
                "groups.info",
                "groups.history",
                "groups.members"
            ]
        );
    }

    #[test]
    fn test_rejects_empty_table() {
        static EMPTY: &[Endpoint] = &[];
        assert_eq!(Catalog::new(EMPTY).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        static DUPES: &[Endpoint] = &[endpoint("a", &[]), endpoint("a", &[])];
        assert_eq!(
            Catalog::new(DUPES).unwrap_err(),
            CatalogError::DuplicateEndpoint("a".to_string())
        );
    }

    #[test]
    fn test_rejects_blank_id() {
        static BLANK: &[Endpoint] = &[endpoint("  ", &[])];
        assert_eq!(Catalog::new(BLANK).unwrap_err(), CatalogError::EmptyId);
    }

    #[test]
    fn test_rejects_duplicate_parameters() {
        const PARAMS: &[Parameter] = &[
            Parameter {
                name: "roomId",
                param_type: ParamType::String,
                required: true,
                description: "The room ID",
            },
            Parameter {
                name: "roomId",
                param_type: ParamType::String,
                required: false,
                description: "Again",
            },
        ];
        static TABLE: &[Endpoint] = &[endpoint("rooms.info", PARAMS)];
        assert!(matches!(
            Catalog::new(TABLE).unwrap_err(),
            CatalogError::DuplicateParameter { .. }
        ));
    }
}
