//! Reconciliation logic for syncing client and server shelves.
//!
//! This is the core of the service. Given the server's stored books for an
//! owner and whatever snapshot a client submitted, this module decides, per
//! title, which side wins.
//!
//! # Algorithm
//!
//! 1. Index the client submission by title (last duplicate wins)
//! 2. Index the server shelf by title (first row wins)
//! 3. Server books the client lacks, or holds stale, go back to the client
//! 4. Client books the server lacks become inserts; strictly newer client
//!    books become progress updates
//! 5. Equal timestamps are a no-op on both sides
//!
//! The function is pure: no wall clock, no storage, no shared state. Two
//! calls with the same inputs produce the same plan.

use crate::{Book, Timestamp, Title};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A write the server must apply to its durable shelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum BookWrite {
    /// The title is new for this owner; persist every field.
    Insert(Book),
    /// The client is strictly newer; revise the progress-relevant fields
    /// of the existing (owner, title) row. Creator and language are fixed
    /// at creation and never revised here.
    Update {
        title: Title,
        updated_at: Timestamp,
        progress_index: i64,
        total_index: i64,
    },
}

impl BookWrite {
    /// The title this write targets.
    pub fn title(&self) -> &str {
        match self {
            BookWrite::Insert(book) => &book.title,
            BookWrite::Update { title, .. } => title,
        }
    }
}

/// Result of planning a sync. For shelves without duplicate titles the two
/// lists are disjoint by title; a contradictory submission (the same title
/// twice, straddling the stored timestamp) can land a title in both.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncPlan {
    /// Server books the client must adopt (server newer, or client lacks).
    pub to_return: Vec<Book>,
    /// Writes the server must persist (client newer, or server lacks).
    pub to_write: Vec<BookWrite>,
}

impl SyncPlan {
    /// True when neither side has anything to do.
    pub fn is_noop(&self) -> bool {
        self.to_return.is_empty() && self.to_write.is_empty()
    }
}

/// Plan a sync between the server's shelf and a client submission.
///
/// `server_books` is everything the store holds for the requesting owner,
/// in storage order. `client_books` is the submission as received; it may
/// be empty (a pure pull), contain titles unknown to the server, or omit
/// titles the server has.
///
/// Conflict policy is last-write-wins on `updated_at`, ties favoring the
/// stored copy: on exact equality the server row must have been the source
/// of the client's value, so neither list gets an entry.
pub fn plan(server_books: Vec<Book>, client_books: Vec<Book>) -> SyncPlan {
    // Client index: map overwrite makes the last duplicate title win,
    // mirroring how the submission would land in a keyed store.
    let client_index: HashMap<Title, Timestamp> = client_books
        .iter()
        .map(|book| (book.title.clone(), book.updated_at))
        .collect();

    // Server index: the first row for a title is authoritative. Duplicate
    // (owner, title) rows are possible since storage does not enforce
    // uniqueness; reading in storage order keeps this deterministic.
    let mut server_index: HashMap<Title, Timestamp> = HashMap::new();
    for book in &server_books {
        server_index
            .entry(book.title.clone())
            .or_insert(book.updated_at);
    }

    let mut result = SyncPlan::default();

    for book in server_books {
        match client_index.get(&book.title) {
            // Client holds a stale copy
            Some(&client_ts) if client_ts < book.updated_at => result.to_return.push(book),
            // Client is current or ahead; nothing to send back
            Some(_) => {}
            // Client does not have this title at all
            None => result.to_return.push(book),
        }
    }

    for book in client_books {
        match server_index.get(&book.title) {
            None => result.to_write.push(BookWrite::Insert(book)),
            Some(&server_ts) if book.updated_at > server_ts => {
                result.to_write.push(BookWrite::Update {
                    title: book.title,
                    updated_at: book.updated_at,
                    progress_index: book.progress_index,
                    total_index: book.total_index,
                });
            }
            // Tie or stale client copy: the stored row stays canonical
            Some(_) => {}
        }
    }

    result
}
