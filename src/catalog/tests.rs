use proptest::prelude::*;

use crate::{
    book::{Book, BookId},
    catalog::CatalogIndex,
};

/// Build a catalog from ids, titling each book after its id
#[allow(clippy::unwrap_used)]
fn catalog_with(ids: &[BookId]) -> CatalogIndex {
    let mut catalog = CatalogIndex::new();
    for &id in ids {
        catalog.insert(Book::new(id, &format!("Book {id}"), "Author", "2000").unwrap());
    }
    catalog
}

fn in_order_ids(catalog: &CatalogIndex) -> Vec<BookId> {
    catalog.in_order().map(Book::id).collect()
}

#[test]
fn test_empty_catalog() {
    let catalog = CatalogIndex::new();
    assert!(catalog.is_empty());
    assert_eq!(catalog.len(), 0);
    assert_eq!(catalog.depth(), 0);
    assert!(catalog.search(1).is_none());
    assert_eq!(catalog.in_order().count(), 0);
}

#[test]
fn test_in_order_is_ascending() {
    let catalog = catalog_with(&[5, 2, 8, 1, 9, 3, 7]);
    assert_eq!(in_order_ids(&catalog), vec![1, 2, 3, 5, 7, 8, 9]);
}

#[test]
fn test_traversal_is_restartable() {
    let catalog = catalog_with(&[2, 1, 3]);
    let first = in_order_ids(&catalog);
    let second = in_order_ids(&catalog);
    assert_eq!(first, second);

    // A partially consumed traversal doesn't affect a new one
    let mut partial = catalog.in_order();
    assert_eq!(partial.next().map(Book::id), Some(1));
    assert_eq!(in_order_ids(&catalog), vec![1, 2, 3]);
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_search_returns_the_inserted_book() {
    let mut catalog = CatalogIndex::new();
    let gatsby = catalog.insert(
        Book::new(1, "The Great Gatsby", "F. Scott Fitzgerald", "1925").unwrap(),
    );
    let orwell = catalog.insert(Book::new(2, "1984", "George Orwell", "1949").unwrap());

    assert_eq!(catalog.search(1), Some(gatsby));
    assert_eq!(catalog.search(2), Some(orwell));
    assert_eq!(catalog.find(2).map(Book::title), Some("1984"));
    assert!(catalog.search(3).is_none());
    assert!(catalog.find(-1).is_none());
}

#[test]
fn test_duplicate_ids_are_kept() {
    let catalog = catalog_with(&[4, 4, 2, 4]);
    assert_eq!(catalog.len(), 4);
    assert_eq!(in_order_ids(&catalog), vec![2, 4, 4, 4]);
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_duplicate_search_finds_earliest_insert() {
    let mut catalog = CatalogIndex::new();
    let first = catalog.insert(Book::new(4, "First", "Author", "2000").unwrap());
    catalog.insert(Book::new(4, "Second", "Author", "2000").unwrap());

    assert_eq!(catalog.search(4), Some(first));
    assert_eq!(catalog.find(4).map(Book::title), Some("First"));
}

#[test]
fn test_sorted_inserts_degenerate_into_a_list() {
    let ids: Vec<BookId> = (0..5_000).collect();
    let catalog = catalog_with(&ids);

    // No rebalancing: every node hangs off the right of its predecessor
    assert_eq!(catalog.depth(), ids.len());
    assert_eq!(in_order_ids(&catalog), ids);
    assert!(catalog.search(4_999).is_some());
}

#[test]
fn test_depth_of_balanced_insert_order() {
    let catalog = catalog_with(&[4, 2, 6, 1, 3, 5, 7]);
    assert_eq!(catalog.depth(), 3);
}

proptest! {
    #[test]
    fn prop_in_order_is_non_decreasing(ids in proptest::collection::vec(-50i32..50, 0..64)) {
        let catalog = catalog_with(&ids);
        let walked = in_order_ids(&catalog);

        let mut expected = ids.clone();
        expected.sort_unstable();
        prop_assert_eq!(walked, expected);
    }

    #[test]
    fn prop_search_finds_every_inserted_id(
        ids in proptest::collection::vec(any::<i32>(), 0..64),
        probe in any::<i32>(),
    ) {
        let catalog = catalog_with(&ids);

        for &id in &ids {
            let found = catalog.find(id);
            prop_assert_eq!(found.map(Book::id), Some(id));
        }
        if !ids.contains(&probe) {
            prop_assert!(catalog.search(probe).is_none());
        }
    }
}
