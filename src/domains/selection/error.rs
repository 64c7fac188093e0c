//! Selection errors.
//!
//! Every variant is fatal to the current request: each one is caused by bad
//! caller input or a catalog authoring defect, never by a transient condition.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// An explicit id does not exist in the catalog.
    #[error("unknown endpoint \"{id}\"; run `rc-mcp-gen list` to see available endpoints")]
    UnknownEndpoint { id: String },

    /// A requested profile id is not defined.
    #[error("unknown profile \"{id}\"; available profiles: {}", .available.join(", "))]
    UnknownProfile { id: String, available: Vec<String> },

    /// A built-in profile lists an id the catalog does not contain.
    #[error("profile \"{profile}\" references unknown endpoint \"{id}\"")]
    ProfileReferencesUnknownEndpoint { profile: String, id: String },

    /// An authenticated endpoint was selected but the catalog has no login endpoint.
    #[error("selection requires authentication but the catalog has no \"{0}\" endpoint")]
    MissingAuthEndpoint(&'static str),

    /// Neither endpoint ids nor a profile were supplied.
    #[error("no endpoints selected; pass endpoint ids or a profile")]
    EmptyRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_endpoint_points_at_listing() {
        let err = SelectionError::UnknownEndpoint {
            id: "chat.react".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("chat.react"));
        assert!(message.contains("rc-mcp-gen list"));
    }

    #[test]
    fn test_unknown_profile_lists_valid_ids() {
        let err = SelectionError::UnknownProfile {
            id: "ops".to_string(),
            available: vec!["messaging".to_string(), "admin".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown profile \"ops\"; available profiles: messaging, admin"
        );
    }
}
