//! Domain layer: entities and repository contracts.
//!
//! Nothing in here depends on HTTP or on a particular store.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions

pub mod entities;
pub mod repositories;
