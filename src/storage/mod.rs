//! Flat-file persistence split into the line codec and the file helpers.

mod codec;
mod file;

/// File name used when no path is configured, relative to the working
/// directory.
pub const DEFAULT_FILE_NAME: &str = "books.txt";

pub use codec::{decode_line, encode_line, MalformedLine};
pub use file::{read_books, write_books, DecodedFile};
