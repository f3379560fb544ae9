use std::fmt;

use crate::error::LibraryError;
use crate::models::Book;

/// Separator between title and author on each line.
const FIELD_SEPARATOR: char = ',';

/// A line from the books file that could not be split into title and
/// author. Kept around so the caller can tell the user what was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    /// One-based line number inside the file.
    pub line: usize,
    /// Raw line content without its terminator.
    pub content: String,
}

impl fmt::Display for MalformedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {:?}", self.line, self.content)
    }
}

/// Encode a book as `title,author` without the trailing newline.
///
/// Loading splits on the first comma, so a comma is only a problem inside
/// the title. Line breaks are a problem anywhere.
pub fn encode_line(book: &Book) -> Result<String, LibraryError> {
    if book.title.contains(FIELD_SEPARATOR) {
        return Err(unencodable(book, "title contains a comma"));
    }
    if contains_line_break(&book.title) || contains_line_break(&book.author) {
        return Err(unencodable(book, "field contains a line break"));
    }

    Ok(format!("{}{FIELD_SEPARATOR}{}", book.title, book.author))
}

/// Decode one line of the books file.
///
/// Blank lines yield `Ok(None)`. Fields are not trimmed so a saved book
/// comes back byte for byte.
pub fn decode_line(line_no: usize, raw: &str) -> Result<Option<Book>, MalformedLine> {
    let line = raw.strip_suffix('\n').unwrap_or(raw);
    let line = line.strip_suffix('\r').unwrap_or(line);

    if line.trim().is_empty() {
        return Ok(None);
    }

    match line.split_once(FIELD_SEPARATOR) {
        Some((title, author)) => Ok(Some(Book::new(title, author))),
        None => Err(MalformedLine {
            line: line_no,
            content: line.to_string(),
        }),
    }
}

fn contains_line_break(field: &str) -> bool {
    field.contains(['\n', '\r'])
}

fn unencodable(book: &Book, reason: &'static str) -> LibraryError {
    LibraryError::Unencodable {
        title: book.title.clone(),
        reason,
    }
}
