//! Application error type and its HTTP representation.
//!
//! Every failure a request can hit is an [`AppError`] variant. Handlers return
//! `Result<_, AppError>` and axum renders the error through [`IntoResponse`]:
//!
//! ```json
//! {
//!   "error": {
//!     "code": "not_found",
//!     "message": "Short URL not found",
//!     "details": { "short_name": "abc" }
//!   }
//! }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// `long_url` is not an absolute http(s) URL with a host.
    #[error("Invalid URL")]
    InvalidUrl { reason: String },

    /// `short_name` contains something other than letters, digits and `-`.
    #[error("Short name can only contain letters, numbers and hyphens")]
    InvalidShortName { short_name: String },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// None of the accepted identifiers was supplied. Holds the accepted set.
    #[error("Either {0} must be provided")]
    MissingIdentifier(&'static str),

    #[error("Long URL must be provided")]
    MissingLongUrl,

    #[error("Short URL must start with {prefix}")]
    InvalidShortUrlPrefix { prefix: String },

    /// The store matched nothing to modify.
    #[error("Failed to update the record")]
    UpdateFailed { short_name: String },

    /// The store did not take the insert.
    #[error("Failed to insert the record into the database")]
    StoreWriteFailure { reason: String },

    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    Conflict { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidUrl { .. }
            | Self::InvalidShortName { .. }
            | Self::MissingIdentifier(_)
            | Self::MissingLongUrl
            | Self::InvalidShortUrlPrefix { .. }
            | Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } | Self::UpdateFailed { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::StoreWriteFailure { .. } | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable error code used in the JSON body.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidUrl { .. } => "invalid_url",
            Self::InvalidShortName { .. } => "invalid_short_name",
            Self::NotFound { .. } => "not_found",
            Self::MissingIdentifier(_) => "missing_identifier",
            Self::MissingLongUrl => "missing_long_url",
            Self::InvalidShortUrlPrefix { .. } => "invalid_short_url_prefix",
            Self::UpdateFailed { .. } => "update_failed",
            Self::StoreWriteFailure { .. } => "store_write_failure",
            Self::Validation { .. } => "validation_error",
            Self::Conflict { .. } => "conflict",
            Self::Internal { .. } => "internal_error",
        }
    }

    fn details(&self) -> Value {
        match self {
            Self::InvalidUrl { reason } => json!({ "reason": reason }),
            Self::InvalidShortName { short_name } => json!({ "short_name": short_name }),
            Self::InvalidShortUrlPrefix { prefix } => json!({ "prefix": prefix }),
            Self::UpdateFailed { short_name } => json!({ "short_name": short_name }),
            Self::NotFound { details, .. }
            | Self::Validation { details, .. }
            | Self::Conflict { details, .. }
            | Self::Internal { details, .. } => details.clone(),
            // Store driver messages stay in the logs.
            Self::StoreWriteFailure { .. } | Self::MissingIdentifier(_) | Self::MissingLongUrl => {
                json!({})
            }
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        ErrorInfo {
            code: self.code(),
            message: self.to_string(),
            details: self.details(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            Self::StoreWriteFailure { reason } => {
                tracing::error!(reason = %reason, "Store write failed");
            }
            Self::Internal { message, details } => {
                tracing::error!(%message, %details, "Internal error");
            }
            _ => {}
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::conflict(
            "Unique constraint violation",
            json!({ "constraint": db.constraint() }),
        );
    }

    tracing::error!(error = %e, "Database error");
    AppError::internal("Database error", json!({}))
}
