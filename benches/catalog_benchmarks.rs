use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use library_catalog::{BookId, CatalogIndex, Library};
use rand::seq::SliceRandom;

// Shuffled ids give a tree of roughly logarithmic depth
fn shuffled_ids(size: BookId) -> Vec<BookId> {
    let mut ids: Vec<BookId> = (0..size).collect();
    ids.shuffle(&mut rand::rng());
    ids
}

fn build_library(ids: &[BookId]) -> Library {
    let mut library = Library::new(1);
    for &id in ids {
        let book = Library::create_book(id, "Title", "Author", "2000").unwrap();
        library.insert_book(book);
    }
    library
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in [100, 1_000, 10_000] {
        let shuffled = shuffled_ids(size);
        group.bench_with_input(BenchmarkId::new("shuffled", size), &shuffled, |b, ids| {
            b.iter(|| build_library(ids));
        });

        // Sorted input degenerates into a linked list
        if size <= 1_000 {
            let sorted: Vec<BookId> = (0..size).collect();
            group.bench_with_input(BenchmarkId::new("sorted", size), &sorted, |b, ids| {
                b.iter(|| build_library(ids));
            });
        }
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [1_000, 10_000] {
        let ids = shuffled_ids(size);
        let library = build_library(&ids);
        let catalog: &CatalogIndex = library.catalog();

        group.bench_with_input(BenchmarkId::new("hit", size), &ids, |b, ids| {
            b.iter(|| {
                for &id in ids.iter().take(100) {
                    black_box(catalog.search(id));
                }
            });
        });
        group.bench_function(BenchmarkId::new("miss", size), |b| {
            b.iter(|| black_box(catalog.search(-1)));
        });
    }

    group.finish();
}

fn bench_available(c: &mut Criterion) {
    let mut group = c.benchmark_group("available_books");

    // Cost grows with catalog size times ledger length
    for borrowed in [0, 10, 100] {
        let ids = shuffled_ids(1_000);
        let mut library = build_library(&ids);
        for &id in ids.iter().take(borrowed) {
            let found = library.search_book(id);
            library.lend_book(found).unwrap();
        }

        group.bench_function(BenchmarkId::new("borrowed", borrowed), |b| {
            b.iter(|| library.available_books().count());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_search, bench_available);
criterion_main!(benches);
