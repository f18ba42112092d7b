//! Repository trait for URL mapping data access.

use crate::domain::entities::{MappingKey, NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the single mappings collection.
///
/// Every lookup is an exact match on `short_name` or `id`. Implementations must
/// be safe to share between concurrent requests.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlMappingRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryUrlMappingRepository`] - in-process store for tests
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlMappingRepository: Send + Sync {
    /// Inserts a new mapping and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `short_name` is already taken.
    /// Returns [`AppError::Internal`] on store errors.
    async fn create(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError>;

    /// Finds a mapping by exact short name.
    async fn find_by_short_name(&self, short_name: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Finds a mapping by its store-assigned id.
    async fn find_by_id(&self, id: i64) -> Result<Option<UrlMapping>, AppError>;

    /// Sets `long_url` on the mapping named `short_name`.
    ///
    /// Returns the number of records actually modified. Writing the value a
    /// record already holds modifies nothing and yields `0`.
    async fn update_long_url(&self, short_name: &str, long_url: &str) -> Result<u64, AppError>;

    /// Physically removes at most one mapping. Returns the number deleted.
    async fn delete(&self, key: &MappingKey) -> Result<u64, AppError>;

    /// Returns every mapping in store order.
    async fn list_all(&self) -> Result<Vec<UrlMapping>, AppError>;

    /// Round-trips to the store to confirm it is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
