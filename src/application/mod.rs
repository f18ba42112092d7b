//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers and the admin
//! CLI one place to call into.
//!
//! - [`services::url_mapping_service::UrlMappingService`] - Create, resolve, edit, delete and list mappings

pub mod services;
