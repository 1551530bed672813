use std::{
    fmt,
    io::{self, Write},
};

use tracing::{debug, info, warn};

use crate::{
    book::{Book, BookId},
    catalog::{BookHandle, CatalogIndex},
    error::{CatalogError, Result},
    ledger::{BorrowLedger, User, UserId},
    observers::LendObserver,
};

/// Books in `catalog` whose id is not in `ledger`, in ascending id order.
///
/// Every visited book rescans the ledger, so the cost is catalog size times
/// ledger length.
pub fn available_books<'a>(
    catalog: &'a CatalogIndex,
    ledger: &'a BorrowLedger,
) -> impl Iterator<Item = &'a Book> + 'a {
    catalog.in_order().filter(move |book| !ledger.is_borrowed(book.id()))
}

/// Books referenced by `ledger`, most recent borrow first
pub fn borrowed_books<'a>(
    catalog: &'a CatalogIndex,
    ledger: &'a BorrowLedger,
) -> impl Iterator<Item = &'a Book> + 'a {
    ledger.iter().filter_map(move |handle| catalog.get(handle))
}

/// The catalog together with its single user.
///
/// This is the surface the menu talks to: population, lookup, lending and the
/// two listings.
pub struct Library {
    /// Owner of every book
    catalog: CatalogIndex,
    /// The user and their borrow ledger
    user: User,
    /// Registered lend observers
    observers: Vec<Box<dyn LendObserver>>,
}

impl fmt::Debug for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library")
            .field("catalog", &self.catalog)
            .field("user", &self.user)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl Library {
    /// Create an empty library for the user `user_id`
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        Self { catalog: CatalogIndex::new(), user: User::new(user_id), observers: Vec::new() }
    }

    /// Register an observer to be notified of successful lends
    pub fn register_observer(&mut self, observer: Box<dyn LendObserver>) {
        self.observers.push(observer);
    }

    #[must_use]
    pub fn catalog(&self) -> &CatalogIndex {
        &self.catalog
    }

    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Create a book ready for [`Library::insert_book`]
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::OutOfRange` if a text field exceeds its capacity.
    pub fn create_book(
        id: BookId,
        title: &str,
        author: &str,
        publication_date: &str,
    ) -> Result<Book> {
        Book::new(id, title, author, publication_date)
    }

    /// Add a book to the catalog. Duplicate ids are accepted.
    pub fn insert_book(&mut self, book: Book) -> BookHandle {
        self.catalog.insert(book)
    }

    /// Look up a book by id
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no book has this id.
    pub fn search_book(&self, id: BookId) -> Result<BookHandle> {
        self.catalog.search(id).ok_or(CatalogError::NotFound { id })
    }

    /// Lend a looked-up book to the user.
    ///
    /// `book` is normally the result of [`Library::search_book`]. A failed
    /// lookup is passed straight back and the ledger stays unchanged. Lending
    /// a book the user already holds records it again. Returns the lent book so
    /// the caller can confirm it by title.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the lookup failed or the handle does
    /// not belong to this catalog.
    pub fn lend_book(&mut self, book: Result<BookHandle>) -> Result<&Book> {
        let user = self.user.id();
        let handle = match book {
            Ok(handle) => handle,
            Err(err) => {
                info!(user, %err, "lend rejected");
                return Err(err);
            }
        };
        let Some(book) = self.catalog.get(handle) else {
            warn!(user, id = handle.id(), "lend rejected, handle is not from this catalog");
            return Err(CatalogError::NotFound { id: handle.id() });
        };

        if self.user.ledger().is_borrowed(handle.id()) {
            debug!(user, id = handle.id(), "book already borrowed, recording it again");
        }
        self.user.ledger_mut().borrow(handle);

        for observer in &self.observers {
            observer.on_lend(user, book);
        }
        Ok(book)
    }

    /// Books not currently borrowed, ascending by id
    pub fn available_books(&self) -> impl Iterator<Item = &Book> + '_ {
        available_books(&self.catalog, self.user.ledger())
    }

    /// Books the user holds, most recent first
    pub fn borrowed_books(&self) -> impl Iterator<Item = &Book> + '_ {
        borrowed_books(&self.catalog, self.user.ledger())
    }

    /// Write one line per available book
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `out`.
    pub fn print_available_books(&self, out: &mut impl Write) -> io::Result<()> {
        for book in self.available_books() {
            writeln!(
                out,
                "ID: {}, Title: {}, Author: {}, Publication Date: {}",
                book.id(),
                book.title(),
                book.author(),
                book.publication_date()
            )?;
        }
        Ok(())
    }

    /// Write one line per borrowed book, or a notice if there are none
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `out`.
    pub fn print_borrowed_books(&self, out: &mut impl Write) -> io::Result<()> {
        if self.user.ledger().is_empty() {
            return writeln!(out, "No borrowed books.");
        }
        for book in self.borrowed_books() {
            writeln!(
                out,
                "Borrowed Book - ID: {}, Title: {}, Author: {}",
                book.id(),
                book.title(),
                book.author()
            )?;
        }
        Ok(())
    }
}
