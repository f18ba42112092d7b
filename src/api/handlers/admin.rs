//! Handlers for the administrative endpoints (edit, delete, list).

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::admin::{
    DeleteUrlQuery, DeleteUrlResponse, EditUrlRequest, EditUrlResponse, UrlItem, UrlListResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Points an existing mapping at a new long URL.
///
/// # Endpoint
///
/// `PATCH /admin/edit-url`
///
/// # Parameters
///
/// Query string or JSON body:
/// - `long_url` (required) - new destination, stored as given
/// - `short_name` or `short_url` - which mapping; `short_name` wins if both are sent
///
/// # Errors
///
/// Returns 400 Bad Request if `long_url` or the identifier is missing, or if
/// `short_url` does not start with the base prefix.
/// Returns 404 Not Found if the mapping does not exist or nothing changed.
pub async fn edit_url_handler(
    State(state): State<AppState>,
    Query(query): Query<EditUrlRequest>,
    body: Option<Json<EditUrlRequest>>,
) -> Result<Json<EditUrlResponse>, AppError> {
    let (selector, long_url) = query.merge(body.map(|Json(b)| b)).into_parts()?;

    let mapping = state.mapping_service.edit_url(selector, long_url).await?;

    Ok(Json(EditUrlResponse {
        short_url: mapping.short_url,
        long_url: mapping.long_url,
    }))
}

/// Permanently deletes one mapping.
///
/// # Endpoint
///
/// `DELETE /admin/delete-url?id=...|short_name=...|short_url=...`
///
/// Identifiers are tried in that order; the first one present is used.
///
/// # Errors
///
/// Returns 400 Bad Request if no identifier is given, `id` is not an integer,
/// or `short_url` has the wrong prefix.
/// Returns 404 Not Found if nothing was deleted.
pub async fn delete_url_handler(
    State(state): State<AppState>,
    Query(query): Query<DeleteUrlQuery>,
) -> Result<Json<DeleteUrlResponse>, AppError> {
    let selector = query.into_selector()?;

    state.mapping_service.delete_url(selector).await?;

    Ok(Json(DeleteUrlResponse {
        message: "Short URL deleted successfully",
    }))
}

/// Lists every mapping.
///
/// # Endpoint
///
/// `GET /admin/get_urls`
///
/// # Response
///
/// ```json
/// { "urls": [ { "id": 1, "short_url": "https://s.example.com/abc", "long_url": "https://example.com" } ] }
/// ```
pub async fn list_urls_handler(
    State(state): State<AppState>,
) -> Result<Json<UrlListResponse>, AppError> {
    let mappings = state.mapping_service.list_all().await?;

    Ok(Json(UrlListResponse {
        urls: mappings.into_iter().map(UrlItem::from).collect(),
    }))
}
