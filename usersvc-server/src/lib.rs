//! usersvc-server: HTTP server for user records
//!
//! Exposes create/read operations over a single SQLite-backed
//! `users` table.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, UserSession, UserStore};
pub use http::{build_router, run_server, AppState, ServerConfig};
