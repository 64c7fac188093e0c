//! Dependency closure over a resolved selection.
//!
//! There is exactly one rule: any member that requires authentication needs
//! the login endpoint in the same selection. It is not a general dependency
//! graph.

use tracing::debug;

use super::error::SelectionError;
use super::set::SelectionSet;
use crate::domains::catalog::{Catalog, Endpoint};

/// Id of the endpoint every authenticated endpoint depends on.
pub const AUTH_ENDPOINT_ID: &str = "login";

/// Make `selection` functionally complete against `catalog`.
///
/// When an authenticated endpoint is present and login is not, login is
/// inserted at index 0 and returned. Otherwise the selection is left
/// untouched. Idempotent.
pub fn close(
    selection: &mut SelectionSet,
    catalog: &Catalog,
) -> Result<Option<&'static Endpoint>, SelectionError> {
    if !selection.requires_auth() || selection.contains(AUTH_ENDPOINT_ID) {
        return Ok(None);
    }

    let login = catalog
        .get(AUTH_ENDPOINT_ID)
        .ok_or(SelectionError::MissingAuthEndpoint(AUTH_ENDPOINT_ID))?;
    selection.push_front(login);
    debug!(endpoint = AUTH_ENDPOINT_ID, "Auto-included auth endpoint");

    Ok(Some(login))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::{Category, Method};

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
        Endpoint {
            id: "info",
            method: Method::Get,
            path: "/api/v1/info",
            description: "Server info.",
            category: Category::Misc,
            requires_auth: false,
            parameters: &[],
        },
    ];

    fn select(catalog: &Catalog, ids: &[&str]) -> SelectionSet {
        ids.iter().filter_map(|id| catalog.get(id)).collect()
    }

    #[test]
    fn test_inserts_login_at_front() {
        let catalog = Catalog::new(SCENARIO).unwrap();
        let mut selection = select(&catalog, &["channels.list"]);

        let added = close(&mut selection, &catalog).unwrap();

        assert_eq!(added.map(|e| e.id), Some("login"));
        assert_eq!(selection.ids(), vec!["login", "channels.list"]);
    }

    #[test]
    fn test_preserves_relative_order() {
        let catalog = Catalog::builtin();
        let mut selection = select(catalog, &["info", "chat.search", "me"]);
        close(&mut selection, catalog).unwrap();
        assert_eq!(selection.ids(), vec!["login", "info", "chat.search", "me"]);
    }

    #[test]
    fn test_leaves_login_where_it_is() {
        let catalog = Catalog::builtin();
        let mut selection = select(catalog, &["me", "login"]);
        assert_eq!(close(&mut selection, catalog).unwrap(), None);
        assert_eq!(selection.ids(), vec!["me", "login"]);
    }

    #[test]
    fn test_public_only_selection_is_untouched() {
        let catalog = Catalog::new(SCENARIO).unwrap();
        let mut selection = select(&catalog, &["info"]);
        assert_eq!(close(&mut selection, &catalog).unwrap(), None);
        assert_eq!(selection.ids(), vec!["info"]);
    }

    #[test]
    fn test_idempotent() {
        let catalog = Catalog::builtin();
        let inputs: &[&[&str]] = &[
            &[],
            &["info"],
            &["chat.search"],
            &["users.list", "login", "statistics"],
            &["groups.history", "groups.members", "settings.public"],
        ];
        for ids in inputs {
            let mut once = select(catalog, ids);
            close(&mut once, catalog).unwrap();
            let mut twice = once.clone();
            assert_eq!(close(&mut twice, catalog).unwrap(), None);
            assert_eq!(once, twice, "input {ids:?}");
        }
    }

    #[test]
    fn test_complete_for_every_authenticated_endpoint() {
        let catalog = Catalog::builtin();
        for endpoint in catalog.endpoints().iter().filter(|e| e.requires_auth) {
            let mut selection = select(catalog, &["info", endpoint.id]);
            close(&mut selection, catalog).unwrap();
            assert_eq!(selection.ids()[0], AUTH_ENDPOINT_ID, "for {}", endpoint.id);
        }
    }

    #[test]
    fn test_missing_login_in_catalog() {
        static NO_LOGIN: &[Endpoint] = &[Endpoint {
            id: "me",
            method: Method::Get,
            path: "/api/v1/me",
            description: "Current user.",
            category: Category::Auth,
            requires_auth: true,
            parameters: &[],
        }];
        let catalog = Catalog::new(NO_LOGIN).unwrap();
        let mut selection = select(&catalog, &["me"]);
        assert_eq!(
            close(&mut selection, &catalog),
            Err(SelectionError::MissingAuthEndpoint("login"))
        );
    }
}
