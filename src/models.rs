//! Domain model shared by the collection, the persistence codec and the
//! shell. `Book` stays a plain data holder so the other layers can focus on
//! ordering, encoding and presentation.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single book entry. The title doubles as the lookup key for removal and
/// search, although duplicate titles are allowed to coexist.
pub struct Book {
    /// Title shown in listings and matched by search.
    pub title: String,
    /// Author as typed by the user. Stored verbatim, never normalised.
    pub author: String,
}

impl Book {
    /// Build a book from any pair of string-like values. Nothing is trimmed
    /// so whatever was entered is exactly what gets saved.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }
}

impl fmt::Display for Book {
    /// Render as `Title - Author`, the form used by every listing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.title, self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_title_and_author() {
        let book = Book::new("Dune", "Frank Herbert");
        assert_eq!(book.to_string(), "Dune - Frank Herbert");
    }

    #[test]
    fn test_fields_are_kept_verbatim() {
        let book = Book::new("  padded ", "");
        assert_eq!(book.title, "  padded ");
        assert_eq!(book.author, "");
    }
}
