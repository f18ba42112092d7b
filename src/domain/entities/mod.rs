//! Core domain entities.
//!
//! - [`UrlMapping`] - A stored short name to long URL mapping
//! - [`NewUrlMapping`] - Input for creating a mapping
//! - [`MappingSelector`] / [`MappingKey`] - Ways of identifying an existing mapping

pub mod selector;
pub mod url_mapping;

pub use selector::{MappingKey, MappingSelector};
pub use url_mapping::{NewUrlMapping, UrlMapping};
