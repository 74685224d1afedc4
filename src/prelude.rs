//! The `gunzip-tree` prelude for convenient library usage.
//!
//! # Example
//!
//! ```
//! use gunzip_tree::prelude::*;
//! # fn main() -> Result<()> {
//! let temp = tempfile::tempdir().unwrap();
//! let config = ConfigBuilder::new().root(temp.path().to_str().unwrap()).build()?;
//! assert!(matches!(run(&config, &mut Vec::new()), Err(Error::NoFilesFound)));
//! # Ok(())
//! # }
//! ```

pub use crate::config::{Config, ConfigBuilder};
pub use crate::core_types::{MetadataSync, Outcome, RunSummary};
pub use crate::decompress::{decompress, propagate_timestamps};
pub use crate::discovery::find_candidates;
pub use crate::errors::{Error, Result};
pub use crate::paths::strip_compression_suffix;
pub use crate::{process_candidate, run};
