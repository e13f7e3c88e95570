//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::traits::Filter;
use anyhow::Result;
use catalog::Book;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```
/// use catalog::Book;
/// use pipeline::{FilterPipeline, GenreFilter};
///
/// let pipeline = FilterPipeline::new()
///     .add_filter(GenreFilter::new("Fantasy"));
///
/// let books = vec![Book::new("The Hobbit", "J.R.R. Tolkien", "Fantasy")];
/// let filtered = pipeline.apply(&books)?;
///
/// assert_eq!(filtered, books);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the Filter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the books.
    ///
    /// ## Algorithm
    /// 1. Copy the input shelf
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return the final filtered set
    ///
    /// The result is a fresh container even for an empty pipeline; the
    /// caller's sequence is never handed back.
    ///
    /// # Arguments
    /// * `books` - The books to filter (borrowed, left unchanged)
    ///
    /// # Returns
    /// * `Ok(Vec<Book>)` - The books surviving every filter, in input order
    /// * `Err` - If any filter fails
    pub fn apply(&self, books: &[Book]) -> Result<Vec<Book>> {
        let mut current = books.to_vec();
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(&current)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
