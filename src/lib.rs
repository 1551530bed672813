//! A tiny library catalog.
//!
//! Books are indexed in an unbalanced binary search tree keyed by id, and the
//! single user's borrowed books are kept in a singly linked ledger that
//! references catalog entries by handle. The [`Library`] facade combines both
//! for lookup, lending and the available/borrowed listings.

pub mod book;
pub mod catalog;
pub mod error;
pub mod ledger;
pub mod library;
pub mod menu;
pub mod observers;
pub mod seed;

pub use book::{Book, BookField, BookId};
pub use catalog::{BookHandle, CatalogIndex};
pub use error::{CatalogError, Result};
pub use ledger::{BorrowLedger, User, UserId};
pub use library::Library;
pub use observers::{LendLogger, LendObserver};
