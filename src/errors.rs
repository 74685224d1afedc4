//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the failures that
//! can occur while discovering and decompressing files, offering more context
//! than generic I/O or `anyhow` errors.

use std::path::Path;
use thiserror::Error;

/// Errors produced by the `gunzip-tree` library.
///
/// Only [`Error::RootNotFound`], [`Error::RootNotADirectory`] and
/// [`Error::Output`] abort a run. [`Error::Decompression`] and [`Error::Io`]
/// are contained to a single candidate file by the orchestration loop.
#[derive(Error, Debug)]
pub enum Error {
    // --- Discovery Errors ---
    /// The configured root directory does not exist.
    #[error("Root path '{path}' does not exist")]
    RootNotFound {
        /// The root path as given.
        path: String,
    },

    /// The configured root exists but is not a directory.
    #[error("Root path '{path}' is not a directory")]
    RootNotADirectory {
        /// The root path as given.
        path: String,
    },

    /// Discovery succeeded but found no `.gz` files.
    #[error("No .gz files found.")]
    NoFilesFound,

    // --- Per-file Errors ---
    /// The source is not a valid gzip stream, or the decompressed bytes could
    /// not be written to the destination.
    #[error("{source}")]
    Decompression {
        /// The source file being decompressed.
        path: String,
        /// The underlying `std::io::Error` raised by the reader or writer.
        #[source]
        source: std::io::Error,
    },

    /// Error occurring during file or directory access (create, open, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    // --- Reporting ---
    /// Writing the console report failed.
    #[error("Failed to write report: {0}")]
    Output(#[source] std::io::Error),
}

/// A specialized `Result` type for `gunzip-tree` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error.
pub fn io_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

/// Helper function to create an `Error::Decompression` for a source file.
pub fn decompression_error<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::Decompression {
        path: path.as_ref().display().to_string(),
        source,
    }
}
