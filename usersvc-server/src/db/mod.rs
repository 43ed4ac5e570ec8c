//! Database layer - connection pool, schema and the user store
//!
//! # Design Principles
//!
//! - One pool, built at startup and injected; no global connection state
//! - One pooled connection per request, released when the session drops
//! - Explicit row mapping, no reflection
//! - The UNIQUE constraint on `users.email` is the final word on duplicates

pub mod pool;
pub mod users;

pub use pool::{create_pool, create_pool_with_options, init_schema, DEFAULT_MAX_CONNECTIONS};
pub use users::{DbError, UserSession, UserStore};
