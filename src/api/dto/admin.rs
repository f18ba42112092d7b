//! DTOs for the admin endpoints.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::entities::{MappingSelector, UrlMapping};
use crate::error::AppError;

/// Parameters of `PATCH /admin/edit-url`.
#[derive(Debug, Default, Deserialize)]
pub struct EditUrlRequest {
    pub short_name: Option<String>,
    pub short_url: Option<String>,
    pub long_url: Option<String>,
}

impl EditUrlRequest {
    /// Overlays fields present in `body` on top of the query parameters.
    pub fn merge(self, body: Option<Self>) -> Self {
        match body {
            Some(body) => Self {
                short_name: body.short_name.or(self.short_name),
                short_url: body.short_url.or(self.short_url),
                long_url: body.long_url.or(self.long_url),
            },
            None => self,
        }
    }

    /// Checks `long_url` first, then that some identifier was given.
    pub fn into_parts(self) -> Result<(MappingSelector, String), AppError> {
        let long_url = self.long_url.ok_or(AppError::MissingLongUrl)?;
        let selector = MappingSelector::for_edit(self.short_name, self.short_url)
            .ok_or(AppError::MissingIdentifier("short_name or short_url"))?;
        Ok((selector, long_url))
    }
}

#[derive(Debug, Serialize)]
pub struct EditUrlResponse {
    pub short_url: String,
    pub long_url: String,
}

/// Query parameters of `DELETE /admin/delete-url`.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteUrlQuery {
    pub id: Option<String>,
    pub short_name: Option<String>,
    pub short_url: Option<String>,
}

impl DeleteUrlQuery {
    pub fn into_selector(self) -> Result<MappingSelector, AppError> {
        let id = self
            .id
            .map(|raw| {
                raw.parse::<i64>().map_err(|_| {
                    AppError::bad_request("id must be an integer", json!({ "id": raw }))
                })
            })
            .transpose()?;

        MappingSelector::for_delete(id, self.short_name, self.short_url)
            .ok_or(AppError::MissingIdentifier("id or short_name or short_url"))
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteUrlResponse {
    pub message: &'static str,
}

/// One entry of the mapping listing.
#[derive(Debug, Serialize)]
pub struct UrlItem {
    pub id: i64,
    pub short_url: String,
    pub long_url: String,
}

impl From<UrlMapping> for UrlItem {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            id: mapping.id,
            short_url: mapping.short_url,
            long_url: mapping.long_url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UrlListResponse {
    pub urls: Vec<UrlItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_missing_long_url_reported_first() {
        let request = EditUrlRequest::default();
        assert!(matches!(request.into_parts(), Err(AppError::MissingLongUrl)));
    }

    #[test]
    fn test_edit_missing_identifier() {
        let request = EditUrlRequest {
            long_url: Some("https://new.com".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            request.into_parts(),
            Err(AppError::MissingIdentifier(_))
        ));
    }

    #[test]
    fn test_delete_id_must_parse() {
        let query = DeleteUrlQuery {
            id: Some("507f1f77bcf86cd799439011".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            query.into_selector(),
            Err(AppError::Validation { .. })
        ));
    }

    #[test]
    fn test_delete_id_takes_precedence() {
        let query = DeleteUrlQuery {
            id: Some("3".to_string()),
            short_name: Some("abc".to_string()),
            short_url: None,
        };
        assert_eq!(query.into_selector().unwrap(), MappingSelector::Id(3));
    }

    #[test]
    fn test_delete_requires_identifier() {
        assert!(matches!(
            DeleteUrlQuery::default().into_selector(),
            Err(AppError::MissingIdentifier(_))
        ));
    }
}
