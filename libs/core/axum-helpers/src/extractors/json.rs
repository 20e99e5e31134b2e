//! JSON body extractor that rejects with [`AppError`].

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
};
use serde::de::DeserializeOwned;

/// Drop-in replacement for [`axum::Json`].
///
/// A body that is not valid JSON, has the wrong content type, or does not
/// fit `T` becomes `400 INVALID_JSON` instead of axum's plain-text rejection.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::AppJson;
///
/// async fn create(AppJson(payload): AppJson<CreateTodoRequest>) -> impl IntoResponse {
///     // ...
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(AppJson(data))
    }
}
