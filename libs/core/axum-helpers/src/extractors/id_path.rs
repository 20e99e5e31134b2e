//! Integer id path parameter extractor.

use crate::errors::{AppError, ErrorCode};
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use std::num::IntErrorKind;

/// Extractor for positive integer path ids (`/todos/{id}`).
///
/// Anything that is not a positive base-10 integer is rejected with
/// `400 invalid id` before the handler runs. Positive integers past
/// `i32::MAX` cannot name a row and are rejected with `404`.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::delete;
/// use axum_helpers::extractors::IdPath;
///
/// async fn remove(IdPath(id): IdPath) -> String {
///     format!("Todo ID: {}", id)
/// }
///
/// let app = Router::new().route("/todos/{id}", delete(remove));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i32);

impl IdPath {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        match raw.parse::<i32>() {
            Ok(id) if id > 0 => Ok(IdPath(id)),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Err(AppError::NotFound(
                ErrorCode::NotFound.default_message().to_string(),
            )),
            _ => Err(AppError::Validation("invalid id".to_string())),
        }
    }
}

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::Validation(format!("invalid id: {}", e.body_text())))?;

        Self::parse(&raw)
    }
}
