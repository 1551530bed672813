use crate::{book::BookId, catalog::BookHandle};

/// Identifier of a library user
pub type UserId = u32;

/// A node in the borrow ledger.
///
/// Each record points at a catalog book through a handle and at the record
/// borrowed before it.
#[derive(Debug)]
struct BorrowRecord {
    /// The borrowed book, owned by the catalog
    book: BookHandle,
    /// The previously borrowed record
    next: Option<Box<BorrowRecord>>,
}

/// Singly linked list of the books a user currently holds, newest first.
///
/// The ledger owns its records but never the books; dropping it leaves the
/// catalog untouched. Borrowing the same book twice records it twice.
#[derive(Debug, Default)]
pub struct BorrowLedger {
    /// Most recent record
    head: Option<Box<BorrowRecord>>,
    /// Number of records
    len: usize,
}

impl BorrowLedger {
    /// Create an empty ledger
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of borrow records, counting repeat borrows
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Whether any record references a book with `id`. Linear in the ledger length.
    #[must_use]
    pub fn is_borrowed(&self, id: BookId) -> bool {
        self.iter().any(|book| book.id() == id)
    }

    /// Prepend a record for `book`.
    ///
    /// Callers resolve the book first; see
    /// [`Library::lend_book`](crate::library::Library::lend_book) for the
    /// checked entry point.
    pub fn borrow(&mut self, book: BookHandle) {
        let next = self.head.take();
        self.head = Some(Box::new(BorrowRecord { book, next }));
        self.len = self.len.saturating_add(1);
    }

    /// Lazily walk the ledger from the most recent borrow to the oldest
    #[must_use]
    pub fn iter(&self) -> Borrowed<'_> {
        Borrowed { next: self.head.as_deref() }
    }
}

impl Drop for BorrowLedger {
    fn drop(&mut self) {
        // Unlink iteratively; the default recursive drop could overflow on long lists
        let mut next = self.head.take();
        while let Some(mut record) = next {
            next = record.next.take();
        }
    }
}

/// Iterator over the handles in a [`BorrowLedger`], newest first
#[derive(Debug)]
pub struct Borrowed<'a> {
    /// Record to yield next
    next: Option<&'a BorrowRecord>,
}

impl Iterator for Borrowed<'_> {
    type Item = BookHandle;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.next?;
        self.next = record.next.as_deref();
        Some(record.book)
    }
}

/// The single library user and the books they hold
#[derive(Debug, Default)]
pub struct User {
    /// User identifier
    id: UserId,
    /// Books currently borrowed
    ledger: BorrowLedger,
}

impl User {
    /// Create a user with an empty ledger
    #[must_use]
    pub fn new(id: UserId) -> Self {
        Self { id, ledger: BorrowLedger::new() }
    }

    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub fn ledger(&self) -> &BorrowLedger {
        &self.ledger
    }

    /// Mutable access to the user's ledger
    pub fn ledger_mut(&mut self) -> &mut BorrowLedger {
        &mut self.ledger
    }
}
