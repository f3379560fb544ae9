//! Error taxonomy for the collection and its persistence helpers.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by [`crate::Library`] operations.
#[derive(Debug, Error)]
pub enum LibraryError {
    /// `remove` was asked for a title that is not in the collection.
    #[error("book not found: {title}")]
    NotFound { title: String },

    /// Reading or writing the books file failed. A missing file on load is
    /// not reported through this variant.
    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A book cannot be written in the `title,author` line format without
    /// corrupting the file.
    #[error("cannot save \"{title}\": {reason}")]
    Unencodable { title: String, reason: &'static str },
}

impl LibraryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
