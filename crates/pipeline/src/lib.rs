//! Pipeline for filtering shelves of book records.
//!
//! This crate provides:
//! - The pure [`filter_by_genre`] function, the primary entry point
//! - Filter trait and the GenreFilter implementation
//! - FilterPipeline for composing filters
//!
//! ## Architecture
//! Filtering is a single synchronous pass: each stage reads a slice of
//! [`Book`](catalog::Book) records and produces a new Vec holding the
//! kept ones, in input order. Stages never mutate the shelf they are
//! given, so the caller's data survives every run unchanged.
//!
//! ## Example Usage
//! ```
//! use catalog::Book;
//! use pipeline::{FilterPipeline, GenreFilter, filter_by_genre};
//!
//! let books = vec![
//!     Book::new("Book 1", "Author 1", "Fantasy"),
//!     Book::new("Book 2", "Author 2", "Science Fiction"),
//!     Book::new("Book 3", "Author 3", "Fantasy"),
//! ];
//!
//! // Direct call
//! let fantasy = filter_by_genre("Fantasy", &books);
//! assert_eq!(fantasy.len(), 2);
//!
//! // Same thing through a pipeline
//! let pipeline = FilterPipeline::new().add_filter(GenreFilter::new("Fantasy"));
//! assert_eq!(pipeline.apply(&books)?, fantasy);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;

// Re-export main types
pub use traits::Filter;
pub use filters::{GenreFilter, filter_by_genre};
pub use filter_pipeline::FilterPipeline;
