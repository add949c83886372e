//! Extractors that reject bad input with a `UsersError` instead of axum's
//! plain-text rejections.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::domain::parse_user_id;
use crate::error::UsersError;

/// The `{id}` path segment, parsed as a user id.
#[derive(Debug, Clone, Copy)]
pub struct UserId(pub Uuid);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = UsersError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| UsersError::BadRequest(e.body_text()))?;

        parse_user_id(&raw).map(UserId)
    }
}

/// JSON request body; any decoding failure is a 400.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = UsersError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| UsersError::BadRequest(e.body_text()))?;

        Ok(Self(value))
    }
}
