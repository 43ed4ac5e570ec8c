//! Route handlers organized by resource

pub mod health;
pub mod root;
pub mod users;

use super::error::ApiError;

/// Fallback for unmatched paths
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Fallback for a known path hit with an unsupported method
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
