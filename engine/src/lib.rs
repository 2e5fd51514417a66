//! # Shelfmark Engine
//!
//! The reconciliation core for Shelfmark, a reading-progress sync service.
//!
//! A client (an e-reader, possibly offline for days) keeps a local shelf of
//! books, each stamped with the unix time of its last change. The server
//! keeps the canonical shelf per owner. This crate decides, per title, which
//! side wins - and nothing else.
//!
//! ## Design Principles
//!
//! - **No IO**: the engine has no knowledge of storage, network, or clocks
//! - **Deterministic**: same inputs always produce the same plan
//! - **Testable**: pure logic, no mocks needed
//!
//! ## Core Concepts
//!
//! ### Books
//!
//! The synchronized unit is a [`Book`]: its identity is the (owner, title)
//! pair, its tie-break signal is `updated_at`, and its progress fields are
//! the payload that moves between devices.
//!
//! ### Plans
//!
//! [`reconcile::plan`] compares the server's shelf with a client submission
//! and produces a [`SyncPlan`]: books the client must adopt, and writes the
//! server must persist. Applying the plan is the caller's job (see the
//! shelfmark-server crate).
//!
//! ## Conflict policy
//!
//! Last-write-wins on `updated_at`, with ties favoring the stored copy: on
//! exact equality the server row must have been the source of the client's
//! value, so neither side moves.
//!
//! ## Quick Start
//!
//! ```rust
//! use shelfmark_engine::{reconcile, Book, BookWrite};
//!
//! let server = vec![Book::new("Dune", 100)];
//! let client = vec![Book::new("Dune", 50), Book::new("Hyperion", 10)];
//!
//! let plan = reconcile::plan(server, client);
//!
//! // Client is stale on Dune, so the server copy comes back...
//! assert_eq!(plan.to_return.len(), 1);
//! // ...and Hyperion is new on the client, so it gets inserted.
//! assert!(matches!(plan.to_write[0], BookWrite::Insert(_)));
//! ```

pub mod book;
pub mod error;
pub mod reconcile;

// Re-export main types at crate root
pub use book::Book;
pub use error::Error;
pub use reconcile::{plan, BookWrite, SyncPlan};

/// Type aliases for clarity
pub type OwnerId = String;
pub type Title = String;
pub type Timestamp = i64;
