//! Error types for the catalog crate.
//!
//! The only fallible operation in this crate is decoding raw record text,
//! so the taxonomy is small. Filtering itself is total and lives in the
//! pipeline crate.

use thiserror::Error;

/// Errors that can occur while decoding book records.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Record text couldn't be decoded into book records.
    ///
    /// Covers malformed JSON as well as records missing one of the
    /// `title`/`author`/`genre` fields; half-formed records are rejected
    /// here rather than entering the catalog.
    #[error("failed to decode book records: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, CatalogError>;
