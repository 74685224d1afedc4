//! Writes the human-readable console report of a run.
//!
//! All functions write to a `&mut dyn Write` so the report can go to stdout in
//! the binary and to an in-memory buffer in tests.

use crate::core_types::Outcome;
use std::io::{self, Write};
use std::path::Path;

pub mod summary;

pub use summary::write_summary;

/// Writes the startup banner: candidate count, resolved root and recursion setting.
pub fn write_banner(
    writer: &mut dyn Write,
    total: usize,
    root: &Path,
    recursive: bool,
) -> io::Result<()> {
    writeln!(
        writer,
        "Found {} .gz file(s) in {} (recursive={}).",
        total,
        root.display(),
        recursive
    )?;
    writeln!(writer)
}

/// Writes the per-file line for the `index`-th (1-based) of `total` candidates.
pub fn write_outcome_line(
    writer: &mut dyn Write,
    index: usize,
    total: usize,
    source: &Path,
    outcome: &Outcome,
) -> io::Result<()> {
    match outcome {
        Outcome::Skipped { destination } => writeln!(
            writer,
            "[{}/{}] Already exists, skipping: {}",
            index,
            total,
            destination.display()
        ),
        Outcome::Succeeded { destination, .. } => writeln!(
            writer,
            "[{}/{}] OK -> {}",
            index,
            total,
            destination.display()
        ),
        Outcome::Failed { error } => writeln!(
            writer,
            "[{}/{}] ERROR decompressing {}: {}",
            index,
            total,
            source.display(),
            error
        ),
    }
}
