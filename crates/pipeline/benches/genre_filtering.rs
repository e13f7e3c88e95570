//! Benchmarks for genre filtering
//!
//! Run with: cargo bench --package pipeline
//!
//! This benchmarks the pure filter function and a pipeline chain over a
//! synthetic shelf; no external data is needed.

use catalog::Book;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pipeline::{FilterPipeline, GenreFilter, filter_by_genre};

const GENRES: &[&str] = &[
    "Fantasy",
    "Science Fiction",
    "Mystery",
    "Romance",
    "Horror",
];

fn build_shelf(len: usize) -> Vec<Book> {
    (0..len)
        .map(|i| {
            Book::new(
                format!("Book {i}"),
                format!("Author {}", i % 97),
                GENRES[i % GENRES.len()],
            )
        })
        .collect()
}

fn bench_filter_by_genre(c: &mut Criterion) {
    let shelf = build_shelf(10_000);

    c.bench_function("filter_by_genre_10k", |b| {
        b.iter(|| {
            let matches = filter_by_genre(black_box("Fantasy"), black_box(&shelf));
            black_box(matches)
        })
    });
}

fn bench_pipeline_chain(c: &mut Criterion) {
    let shelf = build_shelf(10_000);
    let pipeline = FilterPipeline::new()
        .add_filter(GenreFilter::new("Fantasy"))
        .add_filter(GenreFilter::new("Fantasy"));

    c.bench_function("pipeline_two_stage_10k", |b| {
        b.iter(|| {
            let matches = pipeline.apply(black_box(&shelf)).unwrap();
            black_box(matches)
        })
    });
}

criterion_group!(benches, bench_filter_by_genre, bench_pipeline_chain);
criterion_main!(benches);
