//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a shelf of books.

use anyhow::Result;
use catalog::Book;

/// Core trait for filtering books.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters borrow the input slice and return a freshly allocated Vec,
///   so the caller's sequence is never consumed or modified
/// - The trait is fallible even though the genre filter is total; a
///   filter backed by an external lookup can surface its own errors
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a shelf of books.
    ///
    /// # Arguments
    /// * `books` - The books to filter (borrowed, left unchanged)
    ///
    /// # Returns
    /// * `Ok(Vec<Book>)` - A new sequence holding the kept books
    /// * `Err` - If filtering fails
    fn apply(&self, books: &[Book]) -> Result<Vec<Book>>;
}
