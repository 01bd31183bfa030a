use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use crate::server::error::Error;

/// JSON request body whose parse failures are reported as 400 `{error}` responses.
///
/// Wraps [`axum::Json`], a missing content type or a body that doesn't deserialize into `T`
/// becomes a [`ValidationError`](crate::server::error::validation::ValidationError) instead
/// of axum's plain text 415/422 rejection.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Error> {
        let Json(value) = Json::<T>::from_request(req, state).await?;

        Ok(Self(value))
    }
}
