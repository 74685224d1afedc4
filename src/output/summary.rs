// src/output/summary.rs

use crate::constants;
use crate::core_types::RunSummary;
use log::debug;
use std::io::{self, Write};

/// Writes the final summary block with the four run counters.
pub fn write_summary(writer: &mut dyn Write, summary: &RunSummary) -> io::Result<()> {
    debug!("Writing summary: {:?}", summary);
    write!(writer, "\n{}\n", constants::SUMMARY_HEADER)?;
    let rows = [
        (constants::SUMMARY_TOTAL_LABEL, summary.total),
        (constants::SUMMARY_DECOMPRESSED_LABEL, summary.decompressed),
        (constants::SUMMARY_SKIPPED_LABEL, summary.skipped),
        (constants::SUMMARY_FAILED_LABEL, summary.failed),
    ];
    for (label, count) in rows {
        writeln!(writer, "  {}: {}", label, count)?;
    }
    Ok(())
}
