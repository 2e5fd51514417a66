//! Database operations for the books table.
//!
//! This is the persistence side of a sync: reading an owner's shelf and
//! applying the writes a plan decided on. Each statement is its own atomic
//! unit; a batch of writes is deliberately not wrapped in a transaction, so
//! a failure mid-batch leaves earlier writes committed and aborts the rest.

use shelfmark_engine::{Book, BookWrite};
use sqlx::{Row, SqlitePool};

/// A stored book row from the database.
#[derive(Debug)]
pub struct StoredBook {
    pub id: i64,
    pub owner: String,
    pub updated_at: i64,
    pub title: String,
    pub creator: String,
    pub language: String,
    pub progress_index: i64,
    pub total_index: i64,
}

impl<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> for StoredBook {
    fn from_row(row: &'r sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(StoredBook {
            id: row.try_get("id")?,
            owner: row.try_get("owner")?,
            updated_at: row.try_get("updated_at")?,
            title: row.try_get("title")?,
            creator: row.try_get("creator")?,
            language: row.try_get("language")?,
            progress_index: row.try_get("progress_index")?,
            total_index: row.try_get("total_index")?,
        })
    }
}

impl StoredBook {
    /// Convert database row to an engine Book.
    pub fn to_book(&self) -> Book {
        Book {
            id: Some(self.id),
            owner: self.owner.clone(),
            title: self.title.clone(),
            creator: self.creator.clone(),
            language: self.language.clone(),
            updated_at: self.updated_at,
            progress_index: self.progress_index,
            total_index: self.total_index,
        }
    }
}

/// Get every book stored for an owner, in row order.
///
/// Row order matters: it is what makes the engine's first-row-wins policy
/// for duplicate titles deterministic.
pub async fn list_for_owner(pool: &SqlitePool, owner: &str) -> Result<Vec<StoredBook>, sqlx::Error> {
    sqlx::query_as::<_, StoredBook>(
        r#"
        SELECT id, owner, updated_at, title, creator, language,
               progress_index, total_index
        FROM books
        WHERE owner = ?
        ORDER BY id ASC
        "#,
    )
    .bind(owner)
    .fetch_all(pool)
    .await
}

/// Insert a brand-new book row scoped to the owner.
pub async fn insert_book(pool: &SqlitePool, owner: &str, book: &Book) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO books (
            owner, updated_at, title, creator, language,
            progress_index, total_index
        )
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(owner)
    .bind(book.updated_at)
    .bind(&book.title)
    .bind(&book.creator)
    .bind(&book.language)
    .bind(book.progress_index)
    .bind(book.total_index)
    .execute(pool)
    .await?;

    Ok(())
}

/// Revise the progress-relevant fields of an existing (owner, title) row.
///
/// Update-if-matched, not upsert: returns the number of rows affected so
/// the caller can notice an update that targeted nothing.
pub async fn update_progress(
    pool: &SqlitePool,
    owner: &str,
    title: &str,
    updated_at: i64,
    progress_index: i64,
    total_index: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE books
        SET updated_at = ?, progress_index = ?, total_index = ?
        WHERE title = ? AND owner = ?
        "#,
    )
    .bind(updated_at)
    .bind(progress_index)
    .bind(total_index)
    .bind(title)
    .bind(owner)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Apply a plan's writes for one owner, returning the titles written in
/// order. Fail-fast: the first storage error aborts the remaining writes
/// and surfaces to the caller; earlier writes stay committed.
pub async fn apply_writes(
    pool: &SqlitePool,
    owner: &str,
    writes: Vec<BookWrite>,
) -> Result<Vec<String>, sqlx::Error> {
    let mut written = Vec::with_capacity(writes.len());

    for write in writes {
        match write {
            BookWrite::Insert(book) => {
                tracing::debug!(owner, title = %book.title, "inserting new book");
                insert_book(pool, owner, &book).await?;
                written.push(book.title);
            }
            BookWrite::Update {
                title,
                updated_at,
                progress_index,
                total_index,
            } => {
                tracing::debug!(owner, title = %title, updated_at, "updating book progress");
                let rows =
                    update_progress(pool, owner, &title, updated_at, progress_index, total_index)
                        .await?;

                // The planned row can vanish between the read and this
                // write (a concurrent sync for the same owner). Surface
                // the signal but keep the observable outcome.
                if rows == 0 {
                    tracing::warn!(owner, title = %title, "update matched no rows");
                }
                written.push(title);
            }
        }
    }

    Ok(written)
}
