//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppError;

/// Parameters of `POST /shorten`, taken from the query string or a JSON body.
#[derive(Debug, Default, Deserialize)]
pub struct ShortenRequest {
    pub long_url: Option<String>,
    pub short_name: Option<String>,
}

impl ShortenRequest {
    /// Overlays fields present in `body` on top of the query parameters.
    pub fn merge(self, body: Option<Self>) -> Self {
        match body {
            Some(body) => Self {
                long_url: body.long_url.or(self.long_url),
                short_name: body.short_name.or(self.short_name),
            },
            None => self,
        }
    }

    /// Returns `(long_url, short_name)` once both are present.
    pub fn into_parts(self) -> Result<(String, String), AppError> {
        let long_url = self.long_url.ok_or(AppError::MissingLongUrl)?;
        let short_name = self
            .short_name
            .ok_or_else(|| AppError::bad_request("Short name must be provided", json!({})))?;
        Ok((long_url, short_name))
    }
}

/// Body of a 200 response: the mapping was created.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub messages: &'static str,
    pub short_url: String,
}

impl ShortenResponse {
    pub fn success(short_url: String) -> Self {
        Self {
            messages: "success",
            short_url,
        }
    }
}

/// Body of a 202 response: the short name is taken and nothing was written.
#[derive(Debug, Serialize)]
pub struct AlreadyExistsResponse {
    pub detail: &'static str,
    pub short_url: String,
}

impl AlreadyExistsResponse {
    pub fn new(short_url: String) -> Self {
        Self {
            detail: "Short name already exists",
            short_url,
        }
    }
}
