//! Error types for the Shelfmark engine.

use crate::Title;
use thiserror::Error;

/// All possible errors from the Shelfmark engine.
///
/// Reconciliation itself never fails - it is a pure comparison over
/// in-memory data. The only errors here are boundary invariants the caller
/// is expected to check before committing anything.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("total index must be greater than zero for '{title}'")]
    InvalidTotalIndex { title: Title },
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::InvalidTotalIndex {
            title: "Dune".into(),
        };
        assert_eq!(
            err.to_string(),
            "total index must be greater than zero for 'Dune'"
        );
    }
}
