//! # Catalog Crate
//!
//! This crate holds the book record type and the decoding boundary that
//! turns raw record text into typed values.
//!
//! ## Main Components
//!
//! - **types**: The core domain type ([`Book`])
//! - **parser**: Decode JSON book-record arrays into Rust structs
//! - **error**: Error types for record decoding
//!
//! ## Example Usage
//!
//! ```
//! use catalog::{parse_books, Book};
//!
//! let books = parse_books(
//!     r#"[{"title": "Book 1", "author": "Author 1", "genre": "Fantasy"}]"#,
//! )?;
//!
//! assert_eq!(books[0], Book::new("Book 1", "Author 1", "Fantasy"));
//! # Ok::<(), catalog::CatalogError>(())
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::Book;
pub use parser::parse_books;
