use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::LibraryError;
use crate::models::Book;

use super::codec::{decode_line, encode_line, MalformedLine};

/// Books decoded from a file together with the lines that had to be
/// skipped.
#[derive(Debug, Default)]
pub struct DecodedFile {
    pub books: Vec<Book>,
    pub skipped: Vec<MalformedLine>,
}

/// Overwrite `path` with one `title,author` line per book.
///
/// Every book is encoded before the file is opened, so a refused book
/// leaves the previous file untouched.
pub fn write_books(path: &Path, books: &[Book]) -> Result<(), LibraryError> {
    let lines = books
        .iter()
        .map(encode_line)
        .collect::<Result<Vec<_>, _>>()?;

    let file = File::create(path).map_err(|err| LibraryError::io(path, err))?;
    let mut writer = BufWriter::new(file);
    for line in &lines {
        writeln!(writer, "{line}").map_err(|err| LibraryError::io(path, err))?;
    }
    writer.flush().map_err(|err| LibraryError::io(path, err))?;

    debug!(path = %path.display(), count = lines.len(), "saved books");
    Ok(())
}

/// Read every book stored at `path`. A missing file reads as empty.
pub fn read_books(path: &Path) -> Result<DecodedFile, LibraryError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "books file missing, starting empty");
            return Ok(DecodedFile::default());
        }
        Err(err) => return Err(LibraryError::io(path, err)),
    };

    let mut decoded = DecodedFile::default();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|err| LibraryError::io(path, err))?;
        match decode_line(idx + 1, &line) {
            Ok(Some(book)) => decoded.books.push(book),
            Ok(None) => {}
            Err(malformed) => {
                warn!(
                    path = %path.display(),
                    line = malformed.line,
                    content = %malformed.content,
                    "skipping malformed book line"
                );
                decoded.skipped.push(malformed);
            }
        }
    }

    debug!(path = %path.display(), count = decoded.books.len(), "loaded books");
    Ok(decoded)
}
