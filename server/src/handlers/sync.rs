//! Sync handler - reconciles a client shelf snapshot with the stored one.

use crate::db;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use shelfmark_engine::{reconcile, Book};
use sqlx::SqlitePool;

/// Request body for a sync.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRequest {
    /// The owner whose shelf is being reconciled.
    pub owner: String,
    /// The client's snapshot. May be empty: that is a pure pull of
    /// everything the server holds.
    #[serde(default)]
    pub records: Vec<Book>,
}

/// Response for a sync.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResponse {
    /// Server books the client must adopt.
    pub records: Vec<Book>,
    /// Titles the server persisted from this request, in write order.
    pub written_titles: Vec<String>,
}

/// Process a sync request end-to-end: validate, plan, apply, respond.
pub async fn handle_sync(pool: &SqlitePool, request: SyncRequest) -> Result<SyncResponse> {
    if request.owner.is_empty() {
        return Err(AppError::BadRequest("owner must not be empty".to_string()));
    }

    // Boundary invariants are checked before any storage access; a bad
    // record rejects the whole request with no partial work.
    for book in &request.records {
        book.validate()?;
    }

    let server_books: Vec<Book> = db::list_for_owner(pool, &request.owner)
        .await?
        .iter()
        .map(db::StoredBook::to_book)
        .collect();

    let plan = reconcile::plan(server_books, request.records);

    tracing::debug!(
        owner = %request.owner,
        to_return = plan.to_return.len(),
        to_write = plan.to_write.len(),
        "sync planned"
    );

    let written_titles = db::apply_writes(pool, &request.owner, plan.to_write).await?;

    let now = chrono::Utc::now().timestamp();
    db::touch_last_sync(pool, &request.owner, now).await?;

    Ok(SyncResponse {
        records: plan.to_return,
        written_titles,
    })
}
