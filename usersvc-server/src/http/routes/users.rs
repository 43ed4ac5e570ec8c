//! User endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::{UserId, ValidUserCreate};
use crate::http::server::AppState;
use crate::models::{NewUser, User, ValidationError};

/// Create user request. Clients never send an id.
#[derive(Debug, Deserialize)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl TryFrom<UserCreate> for NewUser {
    type Error = ValidationError;

    fn try_from(req: UserCreate) -> Result<Self, Self::Error> {
        NewUser::new(req.name, req.email, req.role)
    }
}

/// User response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            role: u.role,
        }
    }
}

/// GET /users/{user_id} - fetch a single user
async fn get_user(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
) -> Result<Json<UserResponse>, ApiError> {
    let mut session = state.store.session().await?;
    let user = session
        .get_by_id(user_id)
        .await?
        .ok_or(ApiError::UserNotFound)?;

    Ok(Json(UserResponse::from(user)))
}

/// POST /users/ - create a user if the email is free
///
/// The lookup and the insert are separate statements. A concurrent
/// create with the same email can slip between them; the UNIQUE
/// constraint then rejects the insert and the caller gets the same
/// "already exists" error.
async fn create_user(
    State(state): State<Arc<AppState>>,
    ValidUserCreate(new_user): ValidUserCreate,
) -> Result<Json<UserResponse>, ApiError> {
    let mut session = state.store.session().await?;

    if session.find_by_email(new_user.email()).await?.is_some() {
        tracing::debug!("Create rejected: email already registered");
        return Err(ApiError::UserExists);
    }

    let user = session.create(&new_user).await?;
    Ok(Json(UserResponse::from(user)))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/", post(create_user))
        .route("/users", post(create_user))
        .route("/users/{user_id}", get(get_user))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_projects_every_field() {
        let user = User {
            id: 7,
            name: "Ada".into(),
            email: "ada@example.com".into(),
            role: "engineer".into(),
        };
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "name": "Ada",
                "email": "ada@example.com",
                "role": "engineer"
            })
        );
    }

    #[test]
    fn payload_is_validated_on_conversion() {
        let req = UserCreate {
            name: "Ada".into(),
            email: "".into(),
            role: "engineer".into(),
        };
        let err = NewUser::try_from(req).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "email" });
    }
}
