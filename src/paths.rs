//! Maps a compressed candidate to the path its decompressed bytes are written to.

use crate::constants::GZ_EXTENSION;
use std::path::{Path, PathBuf};

/// Removes exactly one trailing `.gz` extension from `path`.
///
/// Paths whose final extension is not `gz` are returned unchanged. Only the last
/// extension is ever removed, so `archive.tar.gz` becomes `archive.tar` and
/// `x.gz.gz` becomes `x.gz`. The result always stays in the source's directory.
///
/// # Examples
///
/// ```
/// use gunzip_tree::paths::strip_compression_suffix;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(
///     strip_compression_suffix(Path::new("logs/data.jsonl.gz")),
///     PathBuf::from("logs/data.jsonl")
/// );
/// assert_eq!(
///     strip_compression_suffix(Path::new("notes.txt")),
///     PathBuf::from("notes.txt")
/// );
/// ```
pub fn strip_compression_suffix(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) if ext == GZ_EXTENSION => path.with_extension(""),
        _ => path.to_path_buf(),
    }
}
