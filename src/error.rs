use thiserror::Error;

use crate::book::{BookField, BookId};

/// Result alias used across the catalog.
pub type Result<T, E = CatalogError> = std::result::Result<T, E>;

/// Errors reported by catalog and ledger operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No book with the requested id exists in the catalog
    #[error("Book not found!")]
    NotFound {
        /// The id that was looked up
        id: BookId,
    },
    /// A text field does not fit its storage capacity
    #[error("{field} is {len} bytes long, the limit is {max}")]
    OutOfRange {
        /// Which field overflowed
        field: BookField,
        /// Length of the rejected value in bytes
        len: usize,
        /// Capacity of the field in bytes
        max: usize,
    },
}
