//! Startup population: the built-in sample books or a JSON seed file.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::{
    book::{Book, BookId},
    error::CatalogError,
    library::Library,
};

/// Errors raised while loading seed data
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed file could not be read
    #[error("Failed to read seed file {}: {source}", .path.display())]
    Read {
        /// Path of the seed file
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
    /// The seed file is not a JSON array of book records
    #[error("Failed to parse seed data: {0}")]
    Parse(#[from] serde_json::Error),
    /// A record does not make a valid book
    #[error("Invalid book record: {0}")]
    Book(#[from] CatalogError),
}

/// A book as written in a seed file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BookRecord {
    /// Catalog key
    pub id: BookId,
    /// Book title
    pub title: String,
    /// Book author
    pub author: String,
    /// Publication date, free form
    pub publication_date: String,
}

impl BookRecord {
    /// Build a record from borrowed fields
    #[must_use]
    pub fn new(id: BookId, title: &str, author: &str, publication_date: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            author: author.to_string(),
            publication_date: publication_date.to_string(),
        }
    }

    /// Validate the record into a [`Book`]
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::OutOfRange` if a field exceeds its capacity.
    pub fn to_book(&self) -> Result<Book, CatalogError> {
        Library::create_book(self.id, &self.title, &self.author, &self.publication_date)
    }
}

/// The three books the catalog starts with
#[must_use]
pub fn sample_records() -> Vec<BookRecord> {
    vec![
        BookRecord::new(1, "The Great Gatsby", "F. Scott Fitzgerald", "1925"),
        BookRecord::new(2, "1984", "George Orwell", "1949"),
        BookRecord::new(3, "To Kill a Mockingbird", "Harper Lee", "1960"),
    ]
}

/// Parse a JSON array of book records
///
/// # Errors
///
/// Returns `SeedError::Parse` if `json` is not a valid record array.
pub fn parse_records(json: &str) -> Result<Vec<BookRecord>, SeedError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a seed file
///
/// # Errors
///
/// Returns `SeedError::Read` if the file cannot be read and
/// `SeedError::Parse` if its contents are not a valid record array.
pub fn load_records(path: &Path) -> Result<Vec<BookRecord>, SeedError> {
    debug!(path = %path.display(), "loading seed file");
    let contents = fs::read_to_string(path)
        .map_err(|source| SeedError::Read { path: path.to_path_buf(), source })?;
    parse_records(&contents)
}

/// Insert `records` into `library`, in order.
///
/// All records are validated before any is inserted, so a bad record leaves
/// the catalog unchanged. Returns the number of books inserted.
///
/// # Errors
///
/// Returns `SeedError::Book` for the first record that is not a valid book.
pub fn populate(library: &mut Library, records: &[BookRecord]) -> Result<usize, SeedError> {
    let books = records.iter().map(BookRecord::to_book).collect::<Result<Vec<_>, _>>()?;
    let count = books.len();
    for book in books {
        library.insert_book(book);
    }
    debug!(count, "catalog populated");
    Ok(count)
}
