// src/constants.rs

/// File extension (without the dot) recognized as gzip-compressed.
pub const GZ_EXTENSION: &str = "gz";

/// File name pattern a discovered entry must match to become a candidate.
/// The leading `?` requires a stem, so a bare `.gz` is not a candidate.
pub const CANDIDATE_PATTERN: &str = "?*.gz";

/// Message printed when discovery yields no candidates.
pub const NO_FILES_MESSAGE: &str = "No .gz files found.";

/// Header line of the final summary block.
pub const SUMMARY_HEADER: &str = "Summary:";

// Summary labels are padded so the colons line up.
pub const SUMMARY_TOTAL_LABEL: &str = ".gz processed   ";
pub const SUMMARY_DECOMPRESSED_LABEL: &str = "Decompressed    ";
pub const SUMMARY_SKIPPED_LABEL: &str = "Skipped (exists)";
pub const SUMMARY_FAILED_LABEL: &str = "Errors          ";
