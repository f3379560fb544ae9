//! The in-memory book collection. Order of insertion is the only ordering
//! the collection knows about; every lookup is a linear scan.

use std::fmt;
use std::path::Path;

use chrono::Local;

use crate::error::LibraryError;
use crate::models::Book;
use crate::storage::{read_books, write_books, MalformedLine};
use crate::telemetry::{ActionLog, TracingLog};

/// Outcome of [`Library::load`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of books appended to the collection.
    pub loaded: usize,
    /// Lines that could not be parsed and were left out.
    pub skipped: Vec<MalformedLine>,
}

/// Insertion-ordered collection of books plus its file round-trip.
pub struct Library {
    books: Vec<Book>,
    log: Box<dyn ActionLog>,
}

impl Library {
    /// Empty library that reports its operations through `tracing`.
    pub fn new() -> Self {
        Self::with_log(TracingLog)
    }

    /// Empty library that reports its operations to `log`.
    pub fn with_log(log: impl ActionLog + 'static) -> Self {
        Self {
            books: Vec::new(),
            log: Box::new(log),
        }
    }

    /// Append a book to the end of the collection.
    pub fn add(&mut self, book: Book) {
        self.record("add_book");
        self.books.push(book);
    }

    /// Remove the first book whose title matches exactly and hand it back.
    /// Later duplicates stay in place.
    pub fn remove(&mut self, title: &str) -> Result<Book, LibraryError> {
        self.record("remove_book");
        let idx = self
            .books
            .iter()
            .position(|book| book.title == title)
            .ok_or_else(|| LibraryError::NotFound {
                title: title.to_string(),
            })?;
        Ok(self.books.remove(idx))
    }

    /// Books whose title contains `keyword`, ignoring case. An empty keyword
    /// matches every book.
    pub fn find(&self, keyword: &str) -> Vec<&Book> {
        self.record("find_books");
        let needle = keyword.to_lowercase();
        self.books
            .iter()
            .filter(|book| book.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Every book in insertion order. Callers get a read-only view so the
    /// ordering invariant can only change through `add` and `remove`.
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    /// Number of books, duplicates included.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// `true` when nothing has been added or loaded yet, or everything was
    /// removed again.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Overwrite `path` with the current contents, one book per line.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LibraryError> {
        write_books(path.as_ref(), &self.books)
    }

    /// Append the books stored at `path`. A missing file is treated as an
    /// empty library; malformed lines are skipped and reported.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, LibraryError> {
        let decoded = read_books(path.as_ref())?;
        let loaded = decoded.books.len();
        self.books.extend(decoded.books);

        Ok(LoadReport {
            loaded,
            skipped: decoded.skipped,
        })
    }

    fn record(&self, action: &str) {
        self.log.record(action, Local::now());
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library")
            .field("books", &self.books)
            .finish_non_exhaustive()
    }
}
