//! Discovers the `.gz` files a run will process.
use crate::config::resolve_root;
use crate::constants::CANDIDATE_PATTERN;
use crate::errors::Result;
use glob::Pattern;
use ignore::DirEntry;
use log::{debug, trace, warn};
use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};

mod walker;

use walker::build_walker;

static CANDIDATE_GLOB: Lazy<Pattern> = Lazy::new(|| Pattern::new(CANDIDATE_PATTERN).unwrap());

/// Finds every regular file under `root` whose name ends in `.gz` after a
/// non-empty stem.
///
/// With `recursive` set to `false` only the immediate children of `root` are
/// considered. The result is sorted by path, so repeated discovery over an
/// unchanged tree returns candidates in the same order. An empty result is not
/// an error.
///
/// Entries the walker cannot read (e.g. a subdirectory without permission) are
/// logged and skipped.
///
/// # Errors
/// Returns `Error::RootNotFound` or `Error::RootNotADirectory` if `root` cannot
/// be scanned.
///
/// # Examples
///
/// ```
/// use gunzip_tree::find_candidates;
/// use std::fs;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempfile::tempdir()?;
/// fs::write(temp.path().join("b.csv.gz"), b"")?;
/// fs::write(temp.path().join("a.jsonl.gz"), b"")?;
/// fs::write(temp.path().join("notes.txt"), b"")?;
///
/// let candidates = find_candidates(temp.path(), true)?;
/// let names: Vec<_> = candidates
///     .iter()
///     .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
///     .collect();
/// assert_eq!(names, ["a.jsonl.gz", "b.csv.gz"]);
/// # Ok(())
/// # }
/// ```
pub fn find_candidates(root: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    // Same checks as config building, for callers that pass a raw path.
    resolve_root(root)?;

    let mut candidates: Vec<PathBuf> = build_walker(root, recursive)
        .filter_map(|entry_result| match entry_result {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Walker error: {}", e);
                None
            }
        })
        .filter(is_candidate)
        .map(DirEntry::into_path)
        .collect();

    candidates.sort();
    debug!(
        "Discovery complete. {} candidate(s) under '{}'",
        candidates.len(),
        root.display()
    );
    Ok(candidates)
}

/// Returns `true` if `entry` is a regular file (or a link to one) whose name
/// matches the candidate glob.
fn is_candidate(entry: &DirEntry) -> bool {
    if !CANDIDATE_GLOB.matches(&entry.file_name().to_string_lossy()) {
        return false;
    }
    if !entry.path().is_file() {
        trace!("Skipping non-file entry: {}", entry.path().display());
        return false;
    }
    true
}
