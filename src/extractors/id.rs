//! Integer path parameters. A segment that does not parse means the route does not exist.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// Message for unknown routes and unparsable path parameters.
pub const ROUTE_NOT_FOUND: &str = "Resource not found";

/// Like `Path<T>`, but rejects with a JSON 404 instead of a plain-text 400.
#[derive(Clone, Debug)]
pub struct IdPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for IdPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(IdPath(value)),
            Err(rejection) => {
                tracing::debug!(%rejection, uri = %parts.uri, "path parameters rejected");
                Err(AppError::NotFound(ROUTE_NOT_FOUND.into()))
            }
        }
    }
}
