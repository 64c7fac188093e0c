//! Ordered, duplicate-free endpoint sequence.

use serde::Serialize;

use crate::domains::catalog::Endpoint;

/// An ordered sequence of catalog endpoints with no repeated id.
///
/// Order is significant: it is the order tools are rendered and reported in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectionSet {
    endpoints: Vec<&'static Endpoint>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an endpoint unless its id is already present.
    ///
    /// Returns `false` when the endpoint was a repeat.
    pub fn push(&mut self, endpoint: &'static Endpoint) -> bool {
        if self.contains(endpoint.id) {
            return false;
        }
        self.endpoints.push(endpoint);
        true
    }

    /// Insert at the front, shifting everything else back by one.
    pub(crate) fn push_front(&mut self, endpoint: &'static Endpoint) -> bool {
        if self.contains(endpoint.id) {
            return false;
        }
        self.endpoints.insert(0, endpoint);
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.endpoints.iter().any(|e| e.id == id)
    }

    /// Whether any member needs an authenticated session.
    pub fn requires_auth(&self) -> bool {
        self.endpoints.iter().any(|e| e.requires_auth)
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.endpoints.iter().map(|e| e.id).collect()
    }

    pub fn endpoints(&self) -> &[&'static Endpoint] {
        &self.endpoints
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Endpoint> + '_ {
        self.endpoints.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

impl FromIterator<&'static Endpoint> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = &'static Endpoint>>(iter: I) -> Self {
        let mut set = Self::new();
        for endpoint in iter {
            set.push(endpoint);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::Catalog;

    #[test]
    fn test_push_ignores_repeats() {
        let catalog = Catalog::builtin();
        let mut set = SelectionSet::new();
        assert!(set.push(catalog.get("me").unwrap()));
        assert!(set.push(catalog.get("info").unwrap()));
        assert!(!set.push(catalog.get("me").unwrap()));
        assert_eq!(set.ids(), vec!["me", "info"]);
    }

    #[test]
    fn test_requires_auth() {
        let catalog = Catalog::builtin();
        let public: SelectionSet = ["login", "info"]
            .iter()
            .filter_map(|id| catalog.get(id))
            .collect();
        assert!(!public.requires_auth());

        let mut private = public.clone();
        private.push(catalog.get("statistics").unwrap());
        assert!(private.requires_auth());
    }

    #[test]
    fn test_push_front() {
        let catalog = Catalog::builtin();
        let mut set: SelectionSet = ["me", "info"]
            .iter()
            .filter_map(|id| catalog.get(id))
            .collect();
        assert!(set.push_front(catalog.get("login").unwrap()));
        assert!(!set.push_front(catalog.get("info").unwrap()));
        assert_eq!(set.ids(), vec!["login", "me", "info"]);
    }
}
