// src/config/path_resolve.rs

use crate::errors::{io_error_with_path, Error, Result};
use std::io;
use std::path::{Path, PathBuf};

/// Resolves the root path string to an absolute, canonicalized directory.
///
/// A missing root and a root that is not a directory are reported as distinct
/// errors so that neither is confused with an empty tree.
pub fn resolve_root<P: AsRef<Path>>(root: P) -> Result<PathBuf> {
    let root = root.as_ref();
    match root.metadata() {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return Err(Error::RootNotADirectory {
                path: root.display().to_string(),
            })
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::RootNotFound {
                path: root.display().to_string(),
            })
        }
        Err(e) => return Err(io_error_with_path(e, root)),
    }
    root.canonicalize().map_err(|e| io_error_with_path(e, root))
}
