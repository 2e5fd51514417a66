//! Database operations for the owners table.

use sqlx::SqlitePool;

/// Insert a freshly minted owner with its creation time as last_sync.
pub async fn insert_owner(pool: &SqlitePool, uuid: &str, now: i64) -> Result<(), sqlx::Error> {
    sqlx::query(r#"INSERT INTO owners (uuid, last_sync) VALUES (?, ?)"#)
        .bind(uuid)
        .bind(now)
        .execute(pool)
        .await?;

    Ok(())
}

/// Record the time of an owner's latest successful sync.
pub async fn touch_last_sync(pool: &SqlitePool, uuid: &str, now: i64) -> Result<(), sqlx::Error> {
    sqlx::query(r#"UPDATE owners SET last_sync = ? WHERE uuid = ?"#)
        .bind(now)
        .bind(uuid)
        .execute(pool)
        .await?;

    Ok(())
}
