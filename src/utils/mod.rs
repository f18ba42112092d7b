//! Input validation helpers.
//!
//! - [`url_validator`] - Long URL well-formedness
//! - [`short_name`] - Short name character rules

pub mod short_name;
pub mod url_validator;
