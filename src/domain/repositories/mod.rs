//! Repository trait definitions for the domain layer.
//!
//! The service only ever talks to the store through [`UrlMappingRepository`].
//! Implementations live in `crate::infrastructure::persistence`; a mock is
//! generated via `mockall` for unit tests.
//!
//! See integration tests in `tests/repository_url_mapping.rs` for usage examples.

pub mod url_mapping_repository;

pub use url_mapping_repository::UrlMappingRepository;

#[cfg(test)]
pub use url_mapping_repository::MockUrlMappingRepository;
