//! Binary entry point: parse configuration, set up logging, load the books
//! file and hand the library to the menu loop.
use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::warn;

use book_manager::config::Cli;
use book_manager::telemetry::init_tracing;
use book_manager::{run_shell, Library};

/// Returning a `Result` surfaces unreadable or unwritable books files on the
/// terminal instead of losing them silently.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let mut library = Library::new();
    let report = library
        .load(&cli.file)
        .with_context(|| format!("failed to load {}", cli.file.display()))?;
    if !report.skipped.is_empty() {
        warn!(
            loaded = report.loaded,
            skipped = report.skipped.len(),
            "books file contained malformed entries"
        );
    }

    let stdin = io::stdin();
    run_shell(&mut library, &cli.file, stdin.lock(), io::stdout())
}
