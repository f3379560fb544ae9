//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::storage::DEFAULT_FILE_NAME;

/// Console book manager backed by a flat `title,author` text file.
#[derive(Debug, Parser)]
#[command(name = "book-manager", version, about)]
pub struct Cli {
    /// Books file to load at startup and save on exit.
    #[arg(long, env = "BOOK_MANAGER_FILE", default_value = DEFAULT_FILE_NAME)]
    pub file: PathBuf,

    /// Log level. `RUST_LOG` wins when set.
    #[arg(long, env = "BOOK_MANAGER_LOG", value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Directive handed to `EnvFilter` for this level.
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
