//! Decoding of raw book records.
//!
//! Upstream suppliers hand catalogs over as a JSON array of
//! `{title, author, genre}` objects. This module decodes that shape into
//! owned [`Book`] values. Input is always an in-memory string; fetching
//! the bytes from wherever they live is the caller's concern.

use crate::error::Result;
use crate::types::Book;

/// Decode a JSON array of book records.
///
/// Every element must carry all three fields. A record missing its
/// `title`, `author`, or `genre` fails the whole decode with
/// [`CatalogError::Decode`](crate::CatalogError); there is no partial
/// result. Unknown extra fields on a record are ignored.
///
/// # Arguments
/// * `json` - JSON text holding an array of book objects
///
/// # Returns
/// * `Ok(Vec<Book>)` - The decoded records, in document order
/// * `Err` - If the text is not a JSON array of well-formed book records
pub fn parse_books(json: &str) -> Result<Vec<Book>> {
    let books = serde_json::from_str(json)?;
    Ok(books)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_books() {
        let json = r#"[
            {"title": "Book 1", "author": "Author 1", "genre": "Fantasy"},
            {"title": "Book 2", "author": "Author 2", "genre": "Science Fiction"}
        ]"#;

        let books = parse_books(json).unwrap();

        assert_eq!(books.len(), 2);
        assert_eq!(books[0], Book::new("Book 1", "Author 1", "Fantasy"));
        assert_eq!(books[1].genre, "Science Fiction");
    }

    #[test]
    fn test_parse_empty_array() {
        let books = parse_books("[]").unwrap();
        assert!(books.is_empty());
    }

    #[test]
    fn test_missing_genre_is_rejected() {
        let json = r#"[{"title": "Book 1", "author": "Author 1"}]"#;
        assert!(parse_books(json).is_err());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let json = r#"[
            {"title": "Book 1", "author": "Author 1", "genre": "Fantasy", "isbn": "123"}
        ]"#;

        let books = parse_books(json).unwrap();
        assert_eq!(books[0].title, "Book 1");
    }

    #[test]
    fn test_not_an_array_is_rejected() {
        let json = r#"{"title": "Book 1", "author": "Author 1", "genre": "Fantasy"}"#;
        assert!(parse_books(json).is_err());
    }
}
