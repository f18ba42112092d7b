//! HTTP middleware: request tracing and CORS.

pub mod cors;
pub mod tracing;
