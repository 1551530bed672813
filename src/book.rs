use std::fmt;

use crate::error::{CatalogError, Result};

/// Identifier of a book in the catalog
pub type BookId = i32;

/// Capacity of the title field in bytes
pub const MAX_TITLE_LEN: usize = 99;
/// Capacity of the author field in bytes
pub const MAX_AUTHOR_LEN: usize = 99;
/// Capacity of the publication date field in bytes
pub const MAX_DATE_LEN: usize = 14;

/// The bounded text fields of a [`Book`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookField {
    /// The book title
    Title,
    /// The book author
    Author,
    /// The publication date
    PublicationDate,
}

impl BookField {
    /// Capacity of this field in bytes
    #[must_use]
    pub const fn capacity(self) -> usize {
        match self {
            Self::Title => MAX_TITLE_LEN,
            Self::Author => MAX_AUTHOR_LEN,
            Self::PublicationDate => MAX_DATE_LEN,
        }
    }

    /// Reject `value` if it does not fit this field.
    fn check(self, value: &str) -> Result<()> {
        let max = self.capacity();
        if value.len() > max {
            return Err(CatalogError::OutOfRange { field: self, len: value.len(), max });
        }
        Ok(())
    }
}

impl fmt::Display for BookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => write!(f, "Title"),
            Self::Author => write!(f, "Author"),
            Self::PublicationDate => write!(f, "Publication Date"),
        }
    }
}

/// A catalog entry.
///
/// Books are built once with [`Book::new`] and then handed to the
/// [`CatalogIndex`](crate::catalog::CatalogIndex), which owns them for the rest
/// of the process. Text fields are length checked in bytes; values over
/// capacity are rejected rather than truncated.
#[derive(Debug, PartialEq, Eq)]
pub struct Book {
    /// Catalog key
    id: BookId,
    /// Title, at most [`MAX_TITLE_LEN`] bytes
    title: String,
    /// Author, at most [`MAX_AUTHOR_LEN`] bytes
    author: String,
    /// Publication date, at most [`MAX_DATE_LEN`] bytes
    publication_date: String,
}

impl Book {
    /// Create a new book
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::OutOfRange` for the first field (title, author,
    /// publication date, in that order) that exceeds its capacity.
    pub fn new(id: BookId, title: &str, author: &str, publication_date: &str) -> Result<Self> {
        BookField::Title.check(title)?;
        BookField::Author.check(author)?;
        BookField::PublicationDate.check(publication_date)?;

        Ok(Self {
            id,
            title: title.to_string(),
            author: author.to_string(),
            publication_date: publication_date.to_string(),
        })
    }

    /// The catalog key of this book
    #[must_use]
    pub fn id(&self) -> BookId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[must_use]
    pub fn publication_date(&self) -> &str {
        &self.publication_date
    }
}
