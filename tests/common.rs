// tests/common.rs

use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn gunzip_tree_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("gunzip-tree"))
}

/// Writes `data` gzip-compressed to `path`, creating parent directories.
#[allow(dead_code)]
pub fn write_gz(path: &Path, data: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    fs::write(path, encoder.finish()?)?;
    Ok(())
}
