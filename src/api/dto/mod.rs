//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs carry every parameter as optional and turn themselves into
//! typed values, so a missing field becomes a descriptive [`crate::error::AppError`]
//! instead of a framework rejection.

pub mod admin;
pub mod health;
pub mod shorten;
