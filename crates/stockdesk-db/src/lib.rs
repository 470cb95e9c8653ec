//! # Stockdesk DB
//!
//! Postgres connection pool setup. The pool is created once at startup and
//! cloned into the application state; handlers never open connections of
//! their own.

use std::env;

/// Initializes the Postgres connection pool from `DATABASE_URL`.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is unset or the database is unreachable. The
/// credential store is not optional, so a process without it should not
/// come up at all.
pub async fn init_db_pool() -> sqlx::PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    sqlx::PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}

// Re-export PgPool for convenience
pub use sqlx::PgPool;
