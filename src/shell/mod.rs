//! Line-oriented menu over any reader/writer pair. Stdin and stdout in
//! production, in-memory buffers in tests.

mod menu;

use std::fmt;
use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::error::LibraryError;
use crate::library::Library;
use crate::models::Book;

use menu::{MenuChoice, MENU};

/// Run the menu until the user saves and exits or input runs out.
///
/// End of input saves too, so books typed into a piped session are kept.
/// `NotFound` and refused saves are reported and the loop continues; I/O
/// failures end the session.
pub fn run_shell<R: BufRead, W: Write>(
    library: &mut Library,
    path: &Path,
    input: R,
    output: W,
) -> Result<()> {
    let mut shell = Shell {
        library,
        path,
        input,
        output,
    };
    shell.run()
}

struct Shell<'a, R, W> {
    library: &'a mut Library,
    path: &'a Path,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<'_, R, W> {
    fn run(&mut self) -> Result<()> {
        loop {
            self.say(format_args!("{MENU}"))?;
            let Some(choice) = self.prompt("Choose an option (1-5): ")? else {
                warn!("input closed, saving before exit");
                return self.save_and_exit();
            };

            let finished = match MenuChoice::parse(&choice) {
                Some(MenuChoice::Add) => self.add()?,
                Some(MenuChoice::Find) => self.find()?,
                Some(MenuChoice::Remove) => self.remove()?,
                Some(MenuChoice::List) => self.list()?,
                Some(MenuChoice::SaveAndExit) => {
                    if self.try_save()? {
                        return Ok(());
                    }
                    false
                }
                None => {
                    self.say(format_args!("Invalid option, please try again."))?;
                    false
                }
            };

            if finished {
                return self.save_and_exit();
            }
        }
    }

    /// Each handler returns `true` when input ran out mid-dialog.
    fn add(&mut self) -> Result<bool> {
        let Some(title) = self.prompt("Title: ")? else {
            return Ok(true);
        };
        let Some(author) = self.prompt("Author: ")? else {
            return Ok(true);
        };
        self.library.add(Book::new(title, author));
        Ok(false)
    }

    fn find(&mut self) -> Result<bool> {
        let Some(keyword) = self.prompt("Search keyword: ")? else {
            return Ok(true);
        };
        let results = render(self.library.find(&keyword));
        if results.is_empty() {
            self.say(format_args!("No matching books."))?;
        } else {
            self.say(format_args!("Results:"))?;
            for book in results {
                self.say(format_args!("  {book}"))?;
            }
        }
        Ok(false)
    }

    fn remove(&mut self) -> Result<bool> {
        let Some(title) = self.prompt("Title to remove: ")? else {
            return Ok(true);
        };
        match self.library.remove(&title) {
            Ok(book) => self.say(format_args!("Removed \"{}\".", book.title))?,
            Err(err) => self.say(format_args!("Error: {err}"))?,
        }
        Ok(false)
    }

    fn list(&mut self) -> Result<bool> {
        let books = render(self.library.list());
        if books.is_empty() {
            self.say(format_args!("The library is empty."))?;
        } else {
            self.say(format_args!("All books:"))?;
            for book in books {
                self.say(format_args!("  {book}"))?;
            }
        }
        Ok(false)
    }

    /// Save and report. Returns `false` when a book could not be encoded so
    /// the user gets a chance to fix it.
    fn try_save(&mut self) -> Result<bool> {
        match self.library.save(self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), count = self.library.len(), "library saved");
                let count = self.library.len();
                let path = self.path;
                self.say(format_args!("Saved {count} book(s) to {}.", path.display()))?;
                Ok(true)
            }
            Err(err @ LibraryError::Unencodable { .. }) => {
                self.say(format_args!("Error: {err}"))?;
                Ok(false)
            }
            Err(err) => Err(err).context("failed to save library"),
        }
    }

    /// Final save once input is gone. A refused book can no longer be fixed
    /// interactively, so it ends the session with an error.
    fn save_and_exit(&mut self) -> Result<()> {
        self.library
            .save(self.path)
            .context("failed to save library")?;
        let count = self.library.len();
        self.say(format_args!("Saved {count} book(s)."))?;
        Ok(())
    }

    /// Print one line of output.
    fn say(&mut self, line: fmt::Arguments<'_>) -> Result<()> {
        writeln!(self.output, "{line}").context("failed to write output")
    }

    /// Print `label` and read one line without its terminator. `None` means
    /// end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}").context("failed to print prompt")?;
        self.output.flush().context("failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }
}

/// Display strings for a set of books, so printing does not hold a borrow
/// of the library.
fn render<'b>(books: impl IntoIterator<Item = &'b Book>) -> Vec<String> {
    books.into_iter().map(ToString::to_string).collect()
}
