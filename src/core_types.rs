//! Defines the per-file outcome and the run-level counters.
//!
//! Every candidate ends a run in exactly one [`Outcome`], and every outcome
//! increments exactly one counter of the [`RunSummary`].

use std::path::PathBuf;

/// Result of the best-effort timestamp propagation after a successful
/// decompression.
///
/// This is informational only. It never changes which counter an outcome
/// increments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataSync {
    /// The source's access and modification times were copied to the destination.
    Applied,
    /// Copying the timestamps failed and the failure was ignored.
    Ignored {
        /// Text of the underlying error, kept for logging.
        reason: String,
    },
}

/// Terminal state of a single candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The destination already existed with a non-zero size and was left untouched.
    Skipped {
        /// The existing destination.
        destination: PathBuf,
    },
    /// The candidate was decompressed into `destination`.
    Succeeded {
        /// The written destination.
        destination: PathBuf,
        /// Number of decompressed bytes written.
        bytes_written: u64,
        /// Whether timestamps were propagated.
        metadata: MetadataSync,
    },
    /// Decompression failed; the run continues with the next candidate.
    Failed {
        /// The error message captured for reporting.
        error: String,
    },
}

/// Counters accumulated over one run.
///
/// # Examples
///
/// ```
/// use gunzip_tree::core_types::{Outcome, RunSummary};
///
/// let mut summary = RunSummary::new(2);
/// summary.record(&Outcome::Failed { error: "invalid gzip header".to_string() });
/// summary.record(&Outcome::Skipped { destination: "b.tar".into() });
///
/// assert_eq!(summary.total, 2);
/// assert_eq!(summary.failed, 1);
/// assert_eq!(summary.skipped, 1);
/// assert!(summary.has_failures());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of candidates discovered.
    pub total: usize,
    /// Candidates decompressed successfully.
    pub decompressed: usize,
    /// Candidates skipped because a non-empty destination already existed.
    pub skipped: usize,
    /// Candidates whose decompression failed.
    pub failed: usize,
}

impl RunSummary {
    /// Creates a summary for a run over `total` candidates.
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    /// Increments the counter matching `outcome`.
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Skipped { .. } => self.skipped += 1,
            Outcome::Succeeded { .. } => self.decompressed += 1,
            Outcome::Failed { .. } => self.failed += 1,
        }
    }

    /// Returns `true` if at least one candidate failed.
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
