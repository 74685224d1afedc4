//! Defines the `Config` struct that parameterizes a run.
//!
//! The root directory and the recursion flag are explicit values handed to the
//! runner, so a run can be pointed at any directory (a temporary one in tests).

use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;
pub mod path_resolve;

pub use path_resolve::resolve_root;

/// Settings for a single batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Absolute, canonicalized directory to scan.
    pub root: PathBuf,
    /// Whether to descend into subdirectories of `root`.
    pub recursive: bool,
}

impl Config {
    /// Creates a `Config` without resolving or validating `root`.
    ///
    /// Prefer [`ConfigBuilder`], which canonicalizes the root and rejects
    /// missing or non-directory paths up front.
    pub fn new(root: impl Into<PathBuf>, recursive: bool) -> Self {
        Self {
            root: root.into(),
            recursive,
        }
    }
}
