//! Custom Axum extractors
//!
//! Both run before handler logic, so a handler only ever sees a
//! well-formed id or a validated payload.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;

use super::error::ApiError;
use super::routes::users::UserCreate;
use crate::models::NewUser;

/// Extract the integer `user_id` path segment
pub struct UserId(pub i64);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<i64> = Path::from_request_parts(parts, state).await?;
        Ok(Self(id))
    }
}

/// Extract a JSON create payload and validate it into a [`NewUser`]
pub struct ValidUserCreate(pub NewUser);

impl<S> FromRequest<S> for ValidUserCreate
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload): Json<UserCreate> = Json::from_request(req, state).await?;
        let user = NewUser::try_from(payload)?;
        Ok(Self(user))
    }
}
