//! In-memory implementation of the URL mapping repository.
//!
//! Behaves like the PostgreSQL repository (unique short names, sequential ids,
//! insertion-ordered listing, "modified" update counts) without a database.
//! Used by the HTTP tests and handy for local experiments.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::{MappingKey, NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlMappingRepository;
use crate::error::AppError;

#[derive(Debug, Default)]
struct Storage {
    next_id: i64,
    // Keyed by id, so iteration order is insertion order.
    rows: BTreeMap<i64, UrlMapping>,
}

impl Storage {
    fn id_of(&self, short_name: &str) -> Option<i64> {
        self.rows
            .values()
            .find(|m| m.short_name == short_name)
            .map(|m| m.id)
    }
}

/// Process-local mapping store guarded by a single async lock.
#[derive(Debug, Default)]
pub struct InMemoryUrlMappingRepository {
    storage: RwLock<Storage>,
}

impl InMemoryUrlMappingRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlMappingRepository for InMemoryUrlMappingRepository {
    async fn create(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let mut storage = self.storage.write().await;

        if storage.id_of(&new_mapping.short_name).is_some() {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "url_mappings_short_name_key" }),
            ));
        }

        storage.next_id += 1;
        let mapping = UrlMapping::new(
            storage.next_id,
            new_mapping.short_name,
            new_mapping.short_url,
            new_mapping.long_url,
            Utc::now(),
        );
        storage.rows.insert(mapping.id, mapping.clone());

        Ok(mapping)
    }

    async fn find_by_short_name(&self, short_name: &str) -> Result<Option<UrlMapping>, AppError> {
        let storage = self.storage.read().await;
        Ok(storage
            .id_of(short_name)
            .and_then(|id| storage.rows.get(&id).cloned()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UrlMapping>, AppError> {
        Ok(self.storage.read().await.rows.get(&id).cloned())
    }

    async fn update_long_url(&self, short_name: &str, long_url: &str) -> Result<u64, AppError> {
        let mut storage = self.storage.write().await;

        let Some(id) = storage.id_of(short_name) else {
            return Ok(0);
        };

        match storage.rows.get_mut(&id) {
            Some(mapping) if mapping.long_url != long_url => {
                mapping.long_url = long_url.to_string();
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    async fn delete(&self, key: &MappingKey) -> Result<u64, AppError> {
        let mut storage = self.storage.write().await;

        let id = match key {
            MappingKey::Id(id) => Some(*id),
            MappingKey::ShortName(name) => storage.id_of(name),
        };

        let removed = id.and_then(|id| storage.rows.remove(&id));
        Ok(u64::from(removed.is_some()))
    }

    async fn list_all(&self) -> Result<Vec<UrlMapping>, AppError> {
        Ok(self.storage.read().await.rows.values().cloned().collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_mapping(short_name: &str, long_url: &str) -> NewUrlMapping {
        NewUrlMapping {
            short_name: short_name.to_string(),
            short_url: format!("https://s.example.com/{short_name}"),
            long_url: long_url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryUrlMappingRepository::new();

        let first = repo.create(new_mapping("a", "https://a.com")).await.unwrap();
        let second = repo.create(new_mapping("b", "https://b.com")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_create_duplicate_is_conflict() {
        let repo = InMemoryUrlMappingRepository::new();
        repo.create(new_mapping("a", "https://a.com")).await.unwrap();

        let result = repo.create(new_mapping("a", "https://other.com")).await;

        assert!(matches!(result, Err(AppError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_update_same_value_modifies_nothing() {
        let repo = InMemoryUrlMappingRepository::new();
        repo.create(new_mapping("a", "https://a.com")).await.unwrap();

        assert_eq!(repo.update_long_url("a", "https://a.com").await.unwrap(), 0);
        assert_eq!(repo.update_long_url("a", "https://b.com").await.unwrap(), 1);
        assert_eq!(repo.update_long_url("missing", "https://b.com").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_by_id_and_name() {
        let repo = InMemoryUrlMappingRepository::new();
        let a = repo.create(new_mapping("a", "https://a.com")).await.unwrap();
        repo.create(new_mapping("b", "https://b.com")).await.unwrap();

        assert_eq!(repo.delete(&MappingKey::Id(a.id)).await.unwrap(), 1);
        assert_eq!(repo.delete(&MappingKey::Id(a.id)).await.unwrap(), 0);
        assert_eq!(
            repo.delete(&MappingKey::ShortName("b".to_string()))
                .await
                .unwrap(),
            1
        );
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_all_in_insertion_order() {
        let repo = InMemoryUrlMappingRepository::new();
        for name in ["z", "a", "m"] {
            repo.create(new_mapping(name, "https://example.com"))
                .await
                .unwrap();
        }

        let names: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.short_name)
            .collect();

        assert_eq!(names, ["z", "a", "m"]);
    }
}
