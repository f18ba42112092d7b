//! Handler for the shorten endpoint.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::shorten::{AlreadyExistsResponse, ShortenRequest, ShortenResponse};
use crate::application::services::ShortenOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a mapping from a caller-chosen short name to a long URL.
///
/// # Endpoint
///
/// `POST /shorten?long_url=...&short_name=...`
///
/// Parameters may also be sent as a JSON body:
///
/// ```json
/// { "long_url": "https://example.com", "short_name": "my-link" }
/// ```
///
/// # Responses
///
/// - **200 OK**: `{"messages": "success", "short_url": "https://s.example.com/my-link"}`
/// - **202 Accepted**: short name already in use, existing mapping untouched
///
/// # Errors
///
/// Returns 400 Bad Request for an invalid URL or short name.
/// Returns 500 Internal Server Error if the store rejects the insert.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Query(query): Query<ShortenRequest>,
    body: Option<Json<ShortenRequest>>,
) -> Result<Response, AppError> {
    let (long_url, short_name) = query.merge(body.map(|Json(b)| b)).into_parts()?;

    let response = match state
        .mapping_service
        .shorten(&long_url, &short_name)
        .await?
    {
        ShortenOutcome::Created(mapping) => {
            (StatusCode::OK, Json(ShortenResponse::success(mapping.short_url))).into_response()
        }
        ShortenOutcome::AlreadyExists { short_url } => (
            StatusCode::ACCEPTED,
            Json(AlreadyExistsResponse::new(short_url)),
        )
            .into_response(),
    };

    Ok(response)
}
