//! Administrative route configuration.

use crate::api::handlers::{
    delete_url_handler, edit_url_handler, health_handler, list_urls_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, patch},
};

/// Routes nested under `/admin`. None of them require authentication.
///
/// # Endpoints
///
/// - `PATCH  /edit-url`   - Point a mapping at a new long URL
/// - `DELETE /delete-url` - Remove a mapping by id, short name or short URL
/// - `GET    /get_urls`   - List every mapping
/// - `GET    /health`     - Store connectivity check
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/edit-url", patch(edit_url_handler))
        .route("/delete-url", delete(delete_url_handler))
        .route("/get_urls", get(list_urls_handler))
        .route("/health", get(health_handler))
}
