//! URL mapping service: validation plus CRUD against the mapping store.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{MappingKey, MappingSelector, NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlMappingRepository;
use crate::error::AppError;
use crate::utils::short_name::is_valid_short_name;
use crate::utils::url_validator::validate_long_url;

/// Result of a shorten request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenOutcome {
    /// A new mapping was inserted.
    Created(UrlMapping),
    /// The short name was already taken. Nothing was written.
    AlreadyExists { short_url: String },
}

/// Service owning every mapping operation.
///
/// Holds the store handle it was constructed with and the base prefix that
/// short URLs are built from.
///
/// # Uniqueness
///
/// `shorten` checks for an existing short name before inserting. Two
/// concurrent requests for the same unused name can both pass that check; the
/// store's unique constraint then rejects the second insert, which is reported
/// as the same soft conflict.
pub struct UrlMappingService {
    repository: Arc<dyn UrlMappingRepository>,
    base_short_url: String,
}

impl UrlMappingService {
    /// Creates a new mapping service.
    pub fn new(repository: Arc<dyn UrlMappingRepository>, base_short_url: impl Into<String>) -> Self {
        Self {
            repository,
            base_short_url: base_short_url.into(),
        }
    }

    /// Prefix every short URL starts with.
    pub fn base_short_url(&self) -> &str {
        &self.base_short_url
    }

    /// Builds the short URL for `short_name`.
    pub fn short_url_for(&self, short_name: &str) -> String {
        format!("{}{}", self.base_short_url, short_name)
    }

    /// Recovers the short name from a full short URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidShortUrlPrefix`] if `short_url` does not start
    /// with the configured base prefix.
    pub fn short_name_from_url<'a>(&self, short_url: &'a str) -> Result<&'a str, AppError> {
        short_url
            .strip_prefix(self.base_short_url.as_str())
            .ok_or_else(|| AppError::InvalidShortUrlPrefix {
                prefix: self.base_short_url.clone(),
            })
    }

    /// Reduces a selector to a key the store can match on.
    pub fn resolve_key(&self, selector: MappingSelector) -> Result<MappingKey, AppError> {
        match selector {
            MappingSelector::Id(id) => Ok(MappingKey::Id(id)),
            MappingSelector::ShortName(name) => Ok(MappingKey::ShortName(name)),
            MappingSelector::ShortUrl(url) => self
                .short_name_from_url(&url)
                .map(|name| MappingKey::ShortName(name.to_string())),
        }
    }

    /// Looks up the mapping a redirect for `short_name` should follow.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping has this exact short name.
    pub async fn resolve(&self, short_name: &str) -> Result<UrlMapping, AppError> {
        self.repository
            .find_by_short_name(short_name)
            .await?
            .ok_or_else(|| {
                tracing::debug!(short_name, "Short name not found");
                AppError::not_found("Short URL not found", json!({ "short_name": short_name }))
            })
    }

    /// Creates a mapping from `short_name` to `long_url`.
    ///
    /// Validation runs in order: the URL first, then the short name. An existing
    /// mapping with the same name is left untouched and reported as
    /// [`ShortenOutcome::AlreadyExists`].
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] if `long_url` is not an absolute http(s) URL
    /// - [`AppError::InvalidShortName`] if `short_name` has characters other than
    ///   letters, digits and `-`
    /// - [`AppError::StoreWriteFailure`] if the store fails the insert
    pub async fn shorten(&self, long_url: &str, short_name: &str) -> Result<ShortenOutcome, AppError> {
        validate_long_url(long_url).map_err(|e| AppError::InvalidUrl {
            reason: e.to_string(),
        })?;

        if !is_valid_short_name(short_name) {
            return Err(AppError::InvalidShortName {
                short_name: short_name.to_string(),
            });
        }

        let short_url = self.short_url_for(short_name);

        if self
            .repository
            .find_by_short_name(short_name)
            .await?
            .is_some()
        {
            tracing::debug!(short_name, "Short name already exists");
            return Ok(ShortenOutcome::AlreadyExists { short_url });
        }

        let new_mapping = NewUrlMapping {
            short_name: short_name.to_string(),
            short_url: short_url.clone(),
            long_url: long_url.to_string(),
        };

        match self.repository.create(new_mapping).await {
            Ok(mapping) => {
                tracing::info!(
                    id = mapping.id,
                    short_name = %mapping.short_name,
                    long_url = %mapping.long_url,
                    "Mapping created"
                );
                Ok(ShortenOutcome::Created(mapping))
            }
            Err(AppError::Conflict { .. }) => {
                tracing::warn!(short_name, "Short name taken by a concurrent request");
                Ok(ShortenOutcome::AlreadyExists { short_url })
            }
            Err(AppError::Internal { message, .. }) => {
                Err(AppError::StoreWriteFailure { reason: message })
            }
            Err(e) => Err(e),
        }
    }

    /// Points an existing mapping at a new long URL.
    ///
    /// The new URL is stored as given; unlike [`Self::shorten`] it is not
    /// checked for well-formedness.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidShortUrlPrefix`] if a short URL selector has the wrong prefix
    /// - [`AppError::NotFound`] if no mapping matches
    /// - [`AppError::UpdateFailed`] if the store modified nothing
    pub async fn edit_url(
        &self,
        selector: MappingSelector,
        long_url: String,
    ) -> Result<UrlMapping, AppError> {
        let key = self.resolve_key(selector)?;

        let existing = match &key {
            MappingKey::Id(id) => self.repository.find_by_id(*id).await?,
            MappingKey::ShortName(name) => self.repository.find_by_short_name(name).await?,
        };

        let mut mapping = existing
            .ok_or_else(|| AppError::not_found("Short URL not found", key.to_details()))?;

        let modified = self
            .repository
            .update_long_url(&mapping.short_name, &long_url)
            .await?;

        if modified == 0 {
            return Err(AppError::UpdateFailed {
                short_name: mapping.short_name,
            });
        }

        tracing::info!(
            short_name = %mapping.short_name,
            long_url = %long_url,
            "Mapping updated"
        );

        mapping.short_url = self.short_url_for(&mapping.short_name);
        mapping.long_url = long_url;
        Ok(mapping)
    }

    /// Physically removes the mapping picked by `selector`.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidShortUrlPrefix`] if a short URL selector has the wrong prefix
    /// - [`AppError::NotFound`] if nothing was deleted
    pub async fn delete_url(&self, selector: MappingSelector) -> Result<(), AppError> {
        let key = self.resolve_key(selector)?;

        let deleted = self.repository.delete(&key).await?;
        if deleted == 0 {
            return Err(AppError::not_found("Short URL not found", key.to_details()));
        }

        tracing::info!(key = ?key, "Mapping deleted");
        Ok(())
    }

    /// Returns every mapping in store order.
    pub async fn list_all(&self) -> Result<Vec<UrlMapping>, AppError> {
        self.repository.list_all().await
    }

    /// Returns `true` if the store answered a ping.
    pub async fn health_check(&self) -> bool {
        match self.repository.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Store ping failed");
                false
            }
        }
    }
}
