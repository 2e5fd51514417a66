//! The synchronized book record.

use crate::error::{Error, Result};
use crate::{OwnerId, Timestamp, Title};
use serde::{Deserialize, Serialize};

/// One book on an owner's shelf.
///
/// The logical identity of a book is the (owner, title) pair; `id` is the
/// storage surrogate key and is never consulted during reconciliation.
/// `creator` and `language` are carried opaquely - they are set once at
/// creation and never revised by a sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Storage-assigned row id; absent on client-submitted books.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Owner this book belongs to. The request-level owner is authoritative
    /// for persistence, so submissions may leave this empty.
    #[serde(default)]
    pub owner: OwnerId,
    /// Book title, the merge key within an owner's shelf.
    pub title: Title,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub language: String,
    /// Seconds since epoch of the last change; the sole tie-break signal.
    pub updated_at: Timestamp,
    /// Current read position.
    pub progress_index: i64,
    /// Total units in the book; must be greater than zero.
    pub total_index: i64,
}

impl Book {
    /// Create a book with just the fields reconciliation looks at.
    pub fn new(title: impl Into<Title>, updated_at: Timestamp) -> Self {
        Self {
            id: None,
            owner: OwnerId::new(),
            title: title.into(),
            creator: String::new(),
            language: String::new(),
            updated_at,
            progress_index: 0,
            total_index: 1,
        }
    }

    /// Set the progress fields.
    pub fn with_progress(mut self, progress_index: i64, total_index: i64) -> Self {
        self.progress_index = progress_index;
        self.total_index = total_index;
        self
    }

    /// Check the boundary invariants before a book is allowed anywhere near
    /// storage. `total_index` of zero would make every progress fraction
    /// meaningless, so it is rejected rather than persisted.
    pub fn validate(&self) -> Result<()> {
        if self.total_index <= 0 {
            return Err(Error::InvalidTotalIndex {
                title: self.title.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_book() {
        let book = Book::new("Dune", 100).with_progress(3, 25);

        assert_eq!(book.title, "Dune");
        assert_eq!(book.updated_at, 100);
        assert_eq!(book.progress_index, 3);
        assert_eq!(book.total_index, 25);
        assert!(book.id.is_none());
    }

    #[test]
    fn validate_rejects_zero_total() {
        let book = Book::new("Dune", 100).with_progress(0, 0);

        let err = book.validate().unwrap_err();
        assert_eq!(
            err,
            Error::InvalidTotalIndex {
                title: "Dune".to_string()
            }
        );
    }

    #[test]
    fn validate_rejects_negative_total() {
        let book = Book::new("Dune", 100).with_progress(0, -4);
        assert!(book.validate().is_err());
    }

    #[test]
    fn validate_accepts_positive_total() {
        let book = Book::new("Dune", 100);
        assert!(book.validate().is_ok());
    }

    #[test]
    fn serialization_roundtrip() {
        let mut book = Book::new("Dune", 100).with_progress(3, 25);
        book.creator = "Frank Herbert".to_string();
        book.language = "en".to_string();

        let json = serde_json::to_string(&book).unwrap();
        let parsed: Book = serde_json::from_str(&json).unwrap();

        assert_eq!(book, parsed);
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let book = Book::new("Dune", 100).with_progress(3, 25);
        let json = serde_json::to_string(&book).unwrap();

        assert!(json.contains("\"updatedAt\":100"));
        assert!(json.contains("\"progressIndex\":3"));
        assert!(json.contains("\"totalIndex\":25"));
        // Absent surrogate key is omitted, not null
        assert!(!json.contains("\"id\""));
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let json = r#"{"title":"Dune","updatedAt":100,"progressIndex":1,"totalIndex":25}"#;
        let book: Book = serde_json::from_str(json).unwrap();

        assert_eq!(book.owner, "");
        assert_eq!(book.creator, "");
        assert!(book.id.is_none());
    }
}
