//! Filter to keep only books in a target genre.
//!
//! The genre label is the sole filter key. Matching is exact string
//! equality: case-sensitive, no trimming, no normalization.

use crate::traits::Filter;
use anyhow::Result;
use catalog::Book;

/// Returns the books whose genre equals `genre`.
///
/// ## Algorithm
/// 1. Walk the input shelf in order
/// 2. Keep each book whose `genre` field equals the target exactly
/// 3. Clone the kept books into a fresh Vec
///
/// The input is only read: the returned Vec is a new allocation, never
/// the caller's container, and relative order of the kept books matches
/// the input. An empty shelf or a genre that matches nothing both yield
/// an empty Vec. An empty `genre` is a valid target and matches books
/// whose genre label is the empty string.
///
/// # Arguments
/// * `genre` - The genre label books must carry to be kept
/// * `books` - The shelf to filter
pub fn filter_by_genre(genre: &str, books: &[Book]) -> Vec<Book> {
    books
        .iter()
        .filter(|book| book.genre == genre)
        .cloned()
        .collect()
}

/// Keeps only books in a single target genre.
///
/// This is [`filter_by_genre`] packaged as a [`Filter`] so it can be
/// composed into a pipeline alongside other filters.
pub struct GenreFilter {
    genre: String,
}

impl GenreFilter {
    /// Create a new GenreFilter.
    ///
    /// # Arguments
    /// * `genre` - The genre label to keep, stored verbatim
    pub fn new(genre: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
        }
    }

    /// The genre label this filter keeps.
    pub fn genre(&self) -> &str {
        &self.genre
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply(&self, books: &[Book]) -> Result<Vec<Book>> {
        Ok(filter_by_genre(&self.genre, books))
    }
}
