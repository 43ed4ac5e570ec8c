//! User store
//!
//! [`UserStore`] owns the pool and is cloned into handler state.
//! [`UserSession`] is the per-request handle: it owns one pooled
//! connection and gives it back when dropped, whichever way the
//! handler exits.

use sqlx::pool::PoolConnection;
use sqlx::sqlite::{Sqlite, SqlitePool, SqliteRow};
use sqlx::Row;

use super::pool::{create_pool_with_options, init_schema};
use crate::models::{NewUser, User};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// The UNIQUE constraint on `users.email` rejected an insert.
    #[error("user with email '{email}' already exists")]
    DuplicateEmail { email: String },
}

impl User {
    /// Map a `users` row onto a record.
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            role: row.try_get("role")?,
        })
    }
}

/// Shared handle to the user table.
#[derive(Debug, Clone)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    /// Wrap an existing pool. The schema is assumed to be in place.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` and make sure the `users` table exists.
    pub async fn open(database_url: &str, max_connections: u32) -> Result<Self, DbError> {
        let pool = create_pool_with_options(database_url, max_connections).await?;
        init_schema(&pool).await?;
        tracing::info!(max_connections, "User store ready");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Acquire a session for the duration of one request.
    pub async fn session(&self) -> Result<UserSession, DbError> {
        let conn = self.pool.acquire().await?;
        tracing::debug!("Store session acquired");
        Ok(UserSession { conn })
    }

    /// Close every pooled connection. Outstanding sessions finish first.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// One request's view of the store.
pub struct UserSession {
    conn: PoolConnection<Sqlite>,
}

impl UserSession {
    /// Look up a user by id. `Ok(None)` when no such row exists.
    pub async fn get_by_id(&mut self, id: i64) -> Result<Option<User>, DbError> {
        let row = sqlx::query("SELECT id, name, email, role FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(row.as_ref().map(User::from_row).transpose()?)
    }

    /// Look up a user by exact email.
    pub async fn find_by_email(&mut self, email: &str) -> Result<Option<User>, DbError> {
        let row = sqlx::query("SELECT id, name, email, role FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(row.as_ref().map(User::from_row).transpose()?)
    }

    /// Insert a user and return the stored row with its new id.
    ///
    /// The statement runs in autocommit mode, so the row is durable when
    /// this returns. A UNIQUE violation on `email` becomes
    /// [`DbError::DuplicateEmail`].
    pub async fn create(&mut self, user: &NewUser) -> Result<User, DbError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (name, email, role)
            VALUES (?, ?, ?)
            RETURNING id, name, email, role
            "#,
        )
        .bind(user.name())
        .bind(user.email())
        .bind(user.role())
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => DbError::DuplicateEmail {
                email: user.email().to_owned(),
            },
            other => DbError::Sqlx(other),
        })?;

        let created = User::from_row(&row)?;
        tracing::info!(user_id = created.id, "User created");
        Ok(created)
    }

    /// Round-trip a trivial query to prove the connection is alive.
    pub async fn ping(&mut self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&mut *self.conn).await?;
        Ok(())
    }
}

impl Drop for UserSession {
    fn drop(&mut self) {
        tracing::debug!("Store session released");
    }
}
