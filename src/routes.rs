//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`               - Redirect to documentation
//! - `POST /shorten`        - Create a mapping
//! - `GET  /{short_name}`   - Redirect to the mapped long URL
//! - `/admin/*`             - Edit, delete, list, health
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive cross-origin policy

use crate::api;
use crate::api::handlers::{redirect_handler, root_handler, shorten_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};

/// Constructs the application router with all routes and middleware.
///
/// Static routes take priority over `/{short_name}`, so a mapping can never
/// shadow `/shorten` or anything under `/admin`.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/shorten", post(shorten_handler))
        .route("/{short_name}", get(redirect_handler))
        .nest("/admin", api::routes::admin_routes())
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}
