//! `gunzip-tree` is a library and command-line tool that decompresses every
//! `.gz` file under a directory tree, writing each output next to its source
//! with the `.gz` extension removed.
//!
//! A run is a single sequential pass:
//! 1.  **Discover**: find all `*.gz` files under the root, sorted by path.
//! 2.  **Process**: for each candidate, skip it if a non-empty output already
//!     exists, otherwise decompress it. A failing file never aborts the run.
//! 3.  **Report**: print one line per file and a final summary.
//!
//! Running it twice over an unchanged tree decompresses nothing the second
//! time: every output already exists and is skipped.
//!
//! # Example: Library Usage
//!
//! ```
//! use gunzip_tree::{run, ConfigBuilder};
//! use flate2::{write::GzEncoder, Compression};
//! use std::fs;
//! use std::io::Write;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // 1. Set up a temporary directory with a gzip file.
//! let temp_dir = tempfile::tempdir()?;
//! let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
//! encoder.write_all(b"hello")?;
//! fs::write(temp_dir.path().join("a.jsonl.gz"), encoder.finish()?)?;
//!
//! // 2. Build a Config for that directory.
//! let config = ConfigBuilder::new()
//!     .root(temp_dir.path().to_str().unwrap())
//!     .build()?;
//!
//! // 3. Run, capturing the report in a buffer.
//! let mut report = Vec::new();
//! let summary = run(&config, &mut report)?;
//!
//! assert_eq!(summary.decompressed, 1);
//! assert_eq!(fs::read(temp_dir.path().join("a.jsonl"))?, b"hello");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod decompress;
pub mod discovery;
pub mod errors;
pub mod output;
pub mod paths;
pub mod prelude;

// Re-export key public types for easier use as a library
pub use config::{Config, ConfigBuilder};
pub use core_types::{MetadataSync, Outcome, RunSummary};
pub use decompress::{decompress, propagate_timestamps};
pub use discovery::find_candidates;
pub use errors::{Error, Result};
pub use paths::strip_compression_suffix;

use log::{debug, warn};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Decides and performs the work for a single candidate.
///
/// The destination is the candidate with one `.gz` removed. If it already
/// exists with a non-zero size the candidate is skipped untouched; a zero-byte
/// destination is treated as a leftover from an interrupted run and
/// overwritten. Any decompression error is captured in [`Outcome::Failed`]
/// rather than returned.
pub fn process_candidate(source: &Path) -> Outcome {
    let destination = strip_compression_suffix(source);

    if let Ok(meta) = fs::metadata(&destination) {
        if meta.len() > 0 {
            debug!("Destination exists, skipping: {}", destination.display());
            return Outcome::Skipped { destination };
        }
    }

    match decompress(source, &destination) {
        Ok(bytes_written) => {
            let metadata = propagate_timestamps(source, &destination);
            Outcome::Succeeded {
                destination,
                bytes_written,
                metadata,
            }
        }
        Err(e) => {
            warn!("Failed to decompress '{}': {}", source.display(), e);
            Outcome::Failed {
                error: e.to_string(),
            }
        }
    }
}

/// Executes a complete run: discover, process each candidate once, report.
///
/// The report (banner, one line per candidate, summary) is written to `writer`.
///
/// # Returns
/// The final [`RunSummary`]. Individual file failures are counted in
/// `failed`; they do not make this function return `Err`.
///
/// # Errors
/// * `Error::NoFilesFound` if discovery yields nothing. Nothing is written in
///   that case.
/// * `Error::RootNotFound` / `Error::RootNotADirectory` if the root is unusable.
/// * `Error::Output` if writing the report fails.
pub fn run(config: &Config, writer: &mut dyn Write) -> Result<RunSummary> {
    let candidates = find_candidates(&config.root, config.recursive)?;
    if candidates.is_empty() {
        return Err(Error::NoFilesFound);
    }

    let total = candidates.len();
    let mut summary = RunSummary::new(total);
    output::write_banner(writer, total, &config.root, config.recursive).map_err(Error::Output)?;

    for (i, source) in candidates.iter().enumerate() {
        let outcome = process_candidate(source);
        summary.record(&outcome);
        output::write_outcome_line(writer, i + 1, total, source, &outcome)
            .map_err(Error::Output)?;
    }

    output::write_summary(writer, &summary).map_err(Error::Output)?;
    writer.flush().map_err(Error::Output)?;
    debug!("Run complete: {:?}", summary);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use tempfile::tempdir;

    fn write_gz(path: &Path, data: &[u8]) {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        fs::write(path, encoder.finish().unwrap()).unwrap();
    }

    fn config_for(root: &Path, recursive: bool) -> Config {
        ConfigBuilder::new()
            .root(root.to_str().unwrap())
            .recursive(recursive)
            .build()
            .unwrap()
    }

    #[test]
    fn test_process_candidate_success() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let src = temp.path().join("a.jsonl.gz");
        write_gz(&src, b"hello");

        let outcome = process_candidate(&src);

        match outcome {
            Outcome::Succeeded {
                destination,
                bytes_written,
                ..
            } => {
                assert_eq!(destination, temp.path().join("a.jsonl"));
                assert_eq!(bytes_written, 5);
            }
            other => panic!("Expected Succeeded, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_process_candidate_skips_non_empty_destination() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let src = temp.path().join("b.tar.gz");
        let dst = temp.path().join("b.tar");
        write_gz(&src, b"real tar bytes");
        fs::write(&dst, "0123456789")?;

        let outcome = process_candidate(&src);

        assert_eq!(outcome, Outcome::Skipped { destination: dst.clone() });
        assert_eq!(fs::read_to_string(&dst)?, "0123456789");
        Ok(())
    }

    #[test]
    fn test_process_candidate_overwrites_zero_byte_destination() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let src = temp.path().join("e.txt.gz");
        let dst = temp.path().join("e.txt");
        write_gz(&src, b"recovered");
        fs::write(&dst, "")?;

        let outcome = process_candidate(&src);

        assert!(matches!(outcome, Outcome::Succeeded { .. }));
        assert_eq!(fs::read_to_string(&dst)?, "recovered");
        Ok(())
    }

    #[test]
    fn test_process_candidate_accepts_empty_and_padded_sources() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let empty = temp.path().join("empty.txt.gz");
        fs::write(&empty, "")?;
        let padded = temp.path().join("padded.txt.gz");
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"hello")?;
        let mut data = encoder.finish()?;
        data.extend([0u8; 16]);
        fs::write(&padded, data)?;

        assert!(matches!(process_candidate(&empty), Outcome::Succeeded { bytes_written: 0, .. }));
        assert!(matches!(process_candidate(&padded), Outcome::Succeeded { bytes_written: 5, .. }));
        assert_eq!(fs::metadata(temp.path().join("empty.txt"))?.len(), 0);
        assert_eq!(fs::read_to_string(temp.path().join("padded.txt"))?, "hello");
        Ok(())
    }

    #[test]
    fn test_process_candidate_captures_error() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let src = temp.path().join("c.log.gz");
        fs::write(&src, "not gzip")?;

        let outcome = process_candidate(&src);

        match outcome {
            Outcome::Failed { error } => assert!(!error.is_empty()),
            other => panic!("Expected Failed, got {:?}", other),
        }
        assert!(!temp.path().join("c.log").exists());
        Ok(())
    }

    #[test]
    fn test_run_reports_and_counts() -> anyhow::Result<()> {
        let temp = tempdir()?;
        write_gz(&temp.path().join("a.jsonl.gz"), b"hello");
        write_gz(&temp.path().join("b.tar.gz"), b"tar");
        fs::write(temp.path().join("b.tar"), "0123456789")?;
        fs::write(temp.path().join("c.log.gz"), "corrupt")?;

        let config = config_for(temp.path(), true);
        let mut report = Vec::new();
        let summary = run(&config, &mut report)?;

        assert_eq!(
            summary,
            RunSummary {
                total: 3,
                decompressed: 1,
                skipped: 1,
                failed: 1,
            }
        );
        let report = String::from_utf8(report)?;
        assert!(report.starts_with("Found 3 .gz file(s) in "));
        assert!(report.contains("[1/3] OK -> "));
        assert!(report.contains("[2/3] Already exists, skipping: "));
        assert!(report.contains("[3/3] ERROR decompressing "));
        assert!(report.ends_with("  Errors          : 1\n"));
        Ok(())
    }

    #[test]
    fn test_run_returns_no_files_found_error() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("plain.txt"), "not compressed")?;
        let config = config_for(temp.path(), true);
        let mut report = Vec::new();

        let result = run(&config, &mut report);

        assert!(matches!(result, Err(Error::NoFilesFound)));
        assert!(report.is_empty());
        Ok(())
    }
}
