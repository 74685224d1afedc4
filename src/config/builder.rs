// src/config/builder.rs

use super::{path_resolve::resolve_root, Config};
use crate::cli::Cli;
use crate::errors::Result;

/// Builder for [`Config`].
///
/// # Examples
///
/// ```
/// use gunzip_tree::ConfigBuilder;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempfile::tempdir()?;
/// let config = ConfigBuilder::new()
///     .root(temp.path().to_str().unwrap())
///     .recursive(false)
///     .build()?;
/// assert!(config.root.is_absolute());
/// assert!(!config.recursive);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    root: Option<String>,
    recursive: Option<bool>,
}

impl ConfigBuilder {
    /// Creates a builder with the defaults: root `.`, recursive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            root: Some(cli.root),
            recursive: Some(!cli.no_recursive),
        }
    }

    /// Sets the directory to scan.
    pub fn root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Sets whether subdirectories are scanned.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = Some(recursive);
        self
    }

    /// Resolves the root and builds the final `Config`.
    ///
    /// # Errors
    /// Returns `Error::RootNotFound` or `Error::RootNotADirectory` if the root
    /// cannot be used.
    pub fn build(self) -> Result<Config> {
        let root_str = self.root.unwrap_or_else(|| ".".to_string());
        let root = resolve_root(&root_str)?;
        log::debug!("Resolved root '{}' to '{}'", root_str, root.display());
        Ok(Config {
            root,
            recursive: self.recursive.unwrap_or(true),
        })
    }
}
