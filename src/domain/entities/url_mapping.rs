//! URL mapping entity: a short name bound to a destination URL.

use chrono::{DateTime, Utc};

/// A stored mapping between a short name and a long URL.
///
/// `short_url` is always `base prefix + short_name`. It is stored alongside the
/// name so reads never need the configured prefix.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlMapping {
    pub id: i64,
    pub short_name: String,
    pub short_url: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(
        id: i64,
        short_name: String,
        short_url: String,
        long_url: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_name,
            short_url,
            long_url,
            created_at,
        }
    }
}

/// Input data for inserting a new mapping. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub short_name: String,
    pub short_url: String,
    pub long_url: String,
}
