//! Catalog data model.
//!
//! Every type here is plain `'static` data: the catalog is authored once as a
//! constant table and only ever read afterwards.

use serde::Serialize;
use std::fmt;

/// HTTP method of a remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Primitive type of a declared parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Fixed partition of the catalog. Every endpoint belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Auth,
    Channels,
    Messaging,
    Users,
    Groups,
    Misc,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 6] = [
        Self::Auth,
        Self::Channels,
        Self::Messaging,
        Self::Users,
        Self::Groups,
        Self::Misc,
    ];

    /// Machine name, as used in listings and tool arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Channels => "channels",
            Self::Messaging => "messaging",
            Self::Users => "users",
            Self::Groups => "groups",
            Self::Misc => "misc",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Auth => "Authentication",
            Self::Channels => "Channels",
            Self::Messaging => "Messaging",
            Self::Users => "Users",
            Self::Groups => "Private Groups",
            Self::Misc => "Misc / System",
        }
    }

    /// Parse a machine name (case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One declared input of an endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub param_type: ParamType,
    pub required: bool,
    pub description: &'static str,
}

/// One remote operation in the catalog.
///
/// `parameters` order is significant: it is the order the renderer emits
/// them in, and therefore part of the measured token cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub id: &'static str,
    pub method: Method,
    pub path: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub requires_auth: bool,
    pub parameters: &'static [Parameter],
}
