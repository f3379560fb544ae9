//! Drives the menu loop with scripted input.

use std::fs;
use std::io::{self, Cursor, Write};
use std::path::Path;

use book_manager::{run_shell, Book, Library};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Run the shell over `script` and return what it printed.
fn run_script(library: &mut Library, path: &Path, script: &str) -> String {
    let mut output = Vec::new();
    run_shell(library, path, Cursor::new(script.as_bytes()), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_scripted_session_saves_remaining_books() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("books.txt");
    let mut library = Library::new();

    let script = "1\nDune\nFrank Herbert\n\
                  1\n1984\nGeorge Orwell\n\
                  2\n19\n\
                  3\nDune\n\
                  3\nDune\n\
                  4\n\
                  5\n";
    let output = run_script(&mut library, &path, script);

    assert!(output.contains("Results:\n  1984 - George Orwell\n"));
    assert!(output.contains("Removed \"Dune\"."));
    assert!(output.contains("Error: book not found: Dune"));
    assert!(output.contains("All books:\n  1984 - George Orwell\n"));
    assert!(output.contains("Saved 1 book(s)"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "1984,George Orwell\n");
}

#[test]
fn test_invalid_choice_reprompts() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("books.txt");
    let mut library = Library::new();

    let output = run_script(&mut library, &path, "9\n4\n5\n");

    assert!(output.contains("Invalid option, please try again."));
    assert!(output.contains("The library is empty."));
    assert_eq!(output.matches("5. Save and exit").count(), 3);
}

#[test]
fn test_end_of_input_still_saves() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("books.txt");
    let mut library = Library::new();

    run_script(&mut library, &path, "1\nEmma\nJane Austen\n");

    assert_eq!(fs::read_to_string(&path).unwrap(), "Emma,Jane Austen\n");
}

#[test]
fn test_refused_save_keeps_session_alive() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("books.txt");
    let mut library = Library::new();

    let script = "1\nEats, Shoots & Leaves\nLynne Truss\n\
                  5\n\
                  3\nEats, Shoots & Leaves\n\
                  5\n";
    let output = run_script(&mut library, &path, script);

    assert!(output.contains("Error: cannot save \"Eats, Shoots & Leaves\": title contains a comma"));
    assert!(library.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_search_without_match() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("books.txt");
    let mut library = Library::new();
    library.add(Book::new("Dune", "Frank Herbert"));

    let output = run_script(&mut library, &path, "2\nzzz\n5\n");

    assert!(output.contains("No matching books."));
}

#[test]
fn test_unwritable_path_ends_session_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("books.txt");
    let mut library = Library::new();

    let mut output = Vec::new();
    let result = run_shell(&mut library, &path, Cursor::new(&b"5\n"[..]), &mut output);

    let err = result.unwrap_err();
    assert!(err.to_string().contains("failed to save library"));
}

/// Writer whose every write fails, like a closed stdout.
struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_broken_output_ends_session_with_context() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("books.txt");
    let mut library = Library::new();

    let err = run_shell(&mut library, &path, Cursor::new(&b"4\n5\n"[..]), BrokenPipe).unwrap_err();

    assert_eq!(err.to_string(), "failed to write output");
    assert!(!path.exists());
}

#[test]
fn test_duplicate_titles_removed_one_per_request() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("books.txt");
    let mut library = Library::new();
    library.add(Book::new("Dune", "first"));
    library.add(Book::new("Dune", "second"));

    let output = run_script(&mut library, &path, "3\nDune\n3\nDune\n3\nDune\n5\n");

    assert_eq!(output.matches("Removed \"Dune\".").count(), 2);
    assert!(output.contains("Error: book not found: Dune"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}
