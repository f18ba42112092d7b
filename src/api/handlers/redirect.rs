//! Handlers that answer with a redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Builds a `302 Found` response pointing at `location`.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if `location` cannot be sent as a header value.
/// Edited long URLs are stored unvalidated, so this can happen.
pub fn found(location: &str) -> Result<Response, AppError> {
    let value = HeaderValue::from_str(location).map_err(|_| {
        AppError::internal(
            "Stored URL cannot be used as a redirect target",
            json!({ "location": location }),
        )
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, value)]).into_response())
}

/// Redirects a short name to its long URL.
///
/// # Endpoint
///
/// `GET /{short_name}`
///
/// # Errors
///
/// Returns 404 Not Found if no mapping has this short name.
pub async fn redirect_handler(
    Path(short_name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let mapping = state.mapping_service.resolve(&short_name).await?;
    found(&mapping.long_url)
}

/// Sends visitors of `/` to the documentation.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    found(&state.root_redirect_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_sets_location() {
        let response = found("https://example.com/target").unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers()[header::LOCATION],
            "https://example.com/target"
        );
    }

    #[test]
    fn test_found_rejects_control_characters() {
        assert!(found("https://example.com/\nSet-Cookie: x=1").is_err());
    }
}
