//! Custom extractors for Axum handlers.
//!
//! Both extractors reject through [`AppError`](crate::errors::AppError), so
//! malformed input gets the same JSON error body as every other failure.

pub mod id_path;
pub mod json;

pub use id_path::IdPath;
pub use json::AppJson;
