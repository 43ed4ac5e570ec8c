//! API error types with IntoResponse
//!
//! Every error becomes `{"detail": "<message>"}` with a fixed status.
//! Database failures are logged and reported generically.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Payload field failed validation (422)
    Validation(ValidationError),

    /// Request could not be decoded: bad JSON, wrong types, bad path (422 unless `status` says otherwise)
    Malformed { status: StatusCode, detail: String },

    /// No user with the requested id (404)
    UserNotFound,

    /// Email already taken.
    ///
    /// Reported as 404 to stay wire-compatible with existing clients of
    /// this API, which only ever saw 404 here.
    UserExists,

    /// No route matched (404)
    RouteNotFound,

    /// Route exists but not for this method (405)
    MethodNotAllowed,

    /// Store unreachable from the health probe (503)
    Unavailable,

    /// Database error (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Malformed { status, .. } => *status,
            Self::UserNotFound | Self::UserExists | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Malformed { detail, .. } => detail.clone(),
            Self::UserNotFound => "User not found!".to_owned(),
            Self::UserExists => "User already exists!".to_owned(),
            Self::RouteNotFound => "Not Found".to_owned(),
            Self::MethodNotAllowed => "Method Not Allowed".to_owned(),
            Self::Unavailable => "database unavailable".to_owned(),
            Self::Database(_) => "an internal error occurred".to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            // Log the actual error, return generic message
            Self::Database(e) => tracing::error!("Database error: {}", e),
            Self::Validation(e) => tracing::debug!(field = e.field(), "Payload rejected: {}", e),
            _ => {}
        }

        let body = json!({ "detail": self.detail() });
        (self.status(), Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::DuplicateEmail { .. } => Self::UserExists,
            _ => Self::Database(e),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = match &rejection {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            other => other.status(),
        };

        Self::Malformed {
            status,
            detail: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Path rejected");
        Self::Malformed {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: "user_id must be an integer".to_owned(),
        }
    }
}
