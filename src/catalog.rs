//! The catalog index: an unbalanced binary search tree of books keyed by id.
//!
//! Books live in an arena owned by [`CatalogIndex`] and are addressed by
//! [`BookHandle`]s. Child links are handles too, so other structures (the
//! borrow ledger) can hold on to a book without owning it or borrowing the
//! catalog. All walks use an explicit stack, so a degenerate tree built from
//! sorted ids does not grow the call stack.

use std::cmp::Ordering;

use tracing::debug;

use crate::book::{Book, BookId};

/// Stable, non-owning reference to a book stored in a [`CatalogIndex`].
///
/// A handle remembers the id of the book it points at; ids never change once
/// a book is created, so the ledger can compare ids without going back to the
/// catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookHandle {
    /// Slot in the catalog arena
    slot: usize,
    /// Id of the referenced book
    id: BookId,
}

impl BookHandle {
    /// Id of the referenced book
    #[must_use]
    pub fn id(self) -> BookId {
        self.id
    }
}

/// Which child link a descent follows
#[derive(Debug, Clone, Copy)]
enum Side {
    /// Strictly smaller ids
    Left,
    /// Greater or equal ids
    Right,
}

impl Side {
    /// The side a book with `id` goes to when compared against `node_id`
    fn of(id: BookId, node_id: BookId) -> Self {
        if id < node_id { Self::Left } else { Self::Right }
    }
}

/// A tree node: the book plus its child links
#[derive(Debug)]
struct Node {
    /// The owned book record
    book: Book,
    /// Subtree of strictly smaller ids
    left: Option<BookHandle>,
    /// Subtree of greater or equal ids
    right: Option<BookHandle>,
}

impl Node {
    /// Child link on `side`
    fn child(&self, side: Side) -> Option<BookHandle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Mutable child link on `side`
    fn child_mut(&mut self, side: Side) -> &mut Option<BookHandle> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Binary search tree of books, ordered by id.
///
/// Every id in a node's left subtree is strictly smaller than the node's id;
/// every id in its right subtree is greater or equal. There is no rebalancing
/// and no removal, so handles stay valid for the lifetime of the index.
#[derive(Debug, Default)]
pub struct CatalogIndex {
    /// Arena of nodes, indexed by `BookHandle`
    nodes: Vec<Node>,
    /// Root of the tree, `None` while empty
    root: Option<BookHandle>,
}

impl CatalogIndex {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of books in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by handle
    fn node(&self, handle: BookHandle) -> Option<&Node> {
        self.nodes.get(handle.slot)
    }

    /// Insert a book and return its handle.
    ///
    /// Descends left when the new id is smaller than the node's id and right
    /// otherwise, so a duplicate id is placed in the right subtree of its twin.
    pub fn insert(&mut self, book: Book) -> BookHandle {
        let id = book.id();
        let handle = BookHandle { slot: self.nodes.len(), id };

        let mut parent = None;
        let mut cursor = self.root;
        while let Some(current) = cursor {
            let Some(node) = self.node(current) else { break };
            if node.book.id() == id {
                debug!(id, "duplicate book id, placing in right subtree");
            }
            let side = Side::of(id, node.book.id());
            parent = Some((current, side));
            cursor = node.child(side);
        }

        self.nodes.push(Node { book, left: None, right: None });
        match parent {
            Some((parent, side)) => {
                if let Some(node) = self.nodes.get_mut(parent.slot) {
                    *node.child_mut(side) = Some(handle);
                }
            }
            None => self.root = Some(handle),
        }

        debug!(id, size = self.nodes.len(), "inserted book into catalog");
        handle
    }

    /// Find the handle of the book with `id`, using the insertion comparator.
    ///
    /// With duplicate ids this returns the one closest to the root, i.e. the
    /// earliest inserted.
    #[must_use]
    pub fn search(&self, id: BookId) -> Option<BookHandle> {
        let mut cursor = self.root;
        while let Some(current) = cursor {
            let node = self.node(current)?;
            cursor = match id.cmp(&node.book.id()) {
                Ordering::Equal => return Some(current),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Find the book with `id`
    #[must_use]
    pub fn find(&self, id: BookId) -> Option<&Book> {
        self.search(id).and_then(|handle| self.get(handle))
    }

    /// Resolve a handle into its book.
    ///
    /// Returns `None` for a handle issued by a different catalog.
    #[must_use]
    pub fn get(&self, handle: BookHandle) -> Option<&Book> {
        self.node(handle).map(|node| &node.book).filter(|book| book.id() == handle.id)
    }

    /// Lazily walk the catalog in ascending id order.
    ///
    /// Each call starts a fresh traversal.
    #[must_use]
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder { catalog: self, stack: Vec::new(), cursor: self.root }
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty)
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(BookHandle, usize)> =
            self.root.map(|root| (root, 1)).into_iter().collect();

        while let Some((handle, level)) = pending.pop() {
            deepest = deepest.max(level);
            if let Some(node) = self.node(handle) {
                let next = level.saturating_add(1);
                pending.extend(node.left.map(|left| (left, next)));
                pending.extend(node.right.map(|right| (right, next)));
            }
        }
        deepest
    }
}

/// In-order (ascending id) iterator over a [`CatalogIndex`]
#[derive(Debug)]
pub struct InOrder<'a> {
    /// The catalog being walked
    catalog: &'a CatalogIndex,
    /// Ancestors whose left subtree is being visited
    stack: Vec<BookHandle>,
    /// Next subtree to descend into
    cursor: Option<BookHandle>,
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Book;

    fn next(&mut self) -> Option<Self::Item> {
        let catalog = self.catalog;
        while let Some(current) = self.cursor {
            self.stack.push(current);
            self.cursor = catalog.node(current).and_then(|node| node.left);
        }

        let node = catalog.node(self.stack.pop()?)?;
        self.cursor = node.right;
        Some(&node.book)
    }
}

#[cfg(test)]
mod tests;
