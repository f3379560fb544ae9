//! Core library surface for the console book manager.
//!
//! The `bin` target only wires configuration, logging and stdin/stdout to the
//! pieces exported here, so tests can drive the same code paths.
pub mod config;
pub mod error;
pub mod library;
pub mod models;
pub mod shell;
pub mod storage;
pub mod telemetry;

/// The collection and its load summary.
pub use library::{Library, LoadReport};

pub use error::LibraryError;
pub use models::Book;

/// Interactive entry point used by `main.rs`.
pub use shell::run_shell;
