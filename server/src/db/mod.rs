//! Database module for SQLite persistence.

mod books;
mod owners;
mod pool;

pub use books::*;
pub use owners::*;
pub use pool::*;
