//! Ways of pointing at an existing mapping.

use serde_json::{Value, json};

/// How the caller identified the mapping to act on.
///
/// Admin routes accept several optional identifiers. They are collapsed into
/// one of these variants before the service runs, so the priority rules live
/// in exactly one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingSelector {
    /// Store-assigned primary key.
    Id(i64),
    /// The short name itself.
    ShortName(String),
    /// A full short URL; the short name is what follows the base prefix.
    ShortUrl(String),
}

impl MappingSelector {
    /// Picks the selector for edit requests: `short_name` wins over `short_url`.
    pub fn for_edit(short_name: Option<String>, short_url: Option<String>) -> Option<Self> {
        match (short_name, short_url) {
            (Some(name), _) => Some(Self::ShortName(name)),
            (None, Some(url)) => Some(Self::ShortUrl(url)),
            (None, None) => None,
        }
    }

    /// Picks the selector for delete requests: `id`, then `short_name`, then `short_url`.
    pub fn for_delete(
        id: Option<i64>,
        short_name: Option<String>,
        short_url: Option<String>,
    ) -> Option<Self> {
        match id {
            Some(id) => Some(Self::Id(id)),
            None => Self::for_edit(short_name, short_url),
        }
    }

    pub fn to_details(&self) -> Value {
        match self {
            Self::Id(id) => json!({ "id": id }),
            Self::ShortName(name) => json!({ "short_name": name }),
            Self::ShortUrl(url) => json!({ "short_url": url }),
        }
    }
}

/// A selector with any short URL already reduced to its short name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingKey {
    Id(i64),
    ShortName(String),
}

impl MappingKey {
    pub fn to_details(&self) -> Value {
        match self {
            Self::Id(id) => json!({ "id": id }),
            Self::ShortName(name) => json!({ "short_name": name }),
        }
    }
}
