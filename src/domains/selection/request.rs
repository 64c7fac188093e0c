//! What a caller asked for, before it is resolved against the catalog.

use super::error::SelectionError;

/// A selection request.
///
/// The entire catalog is a first-class case rather than a magic id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionRequest {
    /// Raw caller-supplied id tokens; may contain comma-joined ids.
    Explicit(Vec<String>),
    /// A preset profile id.
    NamedProfile(String),
    /// Every endpoint in the catalog.
    EntireCatalog,
}

impl SelectionRequest {
    /// Build a request from the optional arguments a front end receives.
    ///
    /// Explicit ids take precedence over a profile. Ids that were supplied
    /// but are all blank are rejected rather than silently replaced by the
    /// profile, as is blank input on both sides.
    pub fn from_parts(
        apis: Option<&[String]>,
        profile: Option<&str>,
    ) -> Result<Self, SelectionError> {
        if let Some(apis) = apis.filter(|apis| !apis.is_empty()) {
            if split_id_tokens(apis).is_empty() {
                return Err(SelectionError::EmptyRequest);
            }
            return Ok(Self::Explicit(apis.to_vec()));
        }
        match profile.map(str::trim) {
            Some(profile) if !profile.is_empty() => Ok(Self::NamedProfile(profile.to_string())),
            _ => Err(SelectionError::EmptyRequest),
        }
    }
}

/// Split comma-joined tokens, trim whitespace and drop empties.
///
/// Some shells and MCP clients collapse list arguments into a single
/// comma-separated string.
pub fn split_id_tokens<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .flat_map(|token| token.as_ref().split(','))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
