//! Root greeting

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Greeting returned by `GET /`
pub const GREETING: &str = "Intro to FastAPI with SQL Demo";

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// GET /
async fn root() -> Json<RootResponse> {
    Json(RootResponse { message: GREETING })
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(root))
}
