//! Database connection pool management and schema bootstrap.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Type alias for the database pool.
pub type Pool = SqlitePool;

/// Create a new database connection pool, creating the file if missing.
pub async fn create_pool(database_url: &str) -> Result<Pool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await
}

/// Create the tables if they do not exist yet.
///
/// There is deliberately no uniqueness constraint on (owner, title): the
/// data model allows duplicate rows per title, and the engine resolves them
/// deterministically by reading in row order.
pub async fn init_schema(pool: &Pool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS owners (
            uuid TEXT PRIMARY KEY,
            last_sync INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            owner TEXT NOT NULL,
            updated_at INTEGER NOT NULL,
            title TEXT NOT NULL,
            creator TEXT NOT NULL,
            language TEXT NOT NULL,
            progress_index INTEGER NOT NULL,
            total_index INTEGER NOT NULL,

            FOREIGN KEY(owner) REFERENCES owners(uuid)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
