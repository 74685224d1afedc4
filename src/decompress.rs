//! The decompression primitive and the best-effort timestamp copy that follows it.

use crate::core_types::MetadataSync;
use crate::errors::{decompression_error, io_error_with_path, Result};
use filetime::FileTime;
use flate2::bufread::GzDecoder;
use log::{debug, warn};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::instrument;

/// Decompresses the gzip file at `source` into `destination`.
///
/// The source is streamed through a buffered copy, so memory use does not
/// depend on file size. Concatenated gzip members are decompressed in full.
/// An empty source produces an empty destination, and NUL padding after the
/// last member is ignored. An existing destination is truncated and
/// overwritten, and its parent directory is created if missing.
///
/// If decompression fails after the destination was opened, the partial output
/// is removed before the error is returned.
///
/// # Returns
/// The number of decompressed bytes written.
///
/// # Errors
/// Returns `Error::Decompression` if the source is not a valid gzip stream or
/// the destination cannot be written, and `Error::Io` if the destination's
/// directory cannot be created.
#[instrument(level = "debug", skip_all, fields(source = %source.display()))]
pub fn decompress(source: &Path, destination: &Path) -> Result<u64> {
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| io_error_with_path(e, parent))?;
        }
    }

    let input = File::open(source).map_err(|e| decompression_error(e, source))?;
    let output = File::create(destination).map_err(|e| decompression_error(e, source))?;

    match copy_decompressed(input, output) {
        Ok(bytes) => {
            debug!(
                "Decompressed '{}' -> '{}' ({} bytes)",
                source.display(),
                destination.display(),
                bytes
            );
            Ok(bytes)
        }
        Err(e) => {
            remove_partial_output(destination);
            Err(decompression_error(e, source))
        }
    }
}

/// Streams every gzip member of `input` into `output`. Both handles are
/// dropped before returning.
fn copy_decompressed(input: File, output: File) -> io::Result<u64> {
    let mut reader = BufReader::new(input);
    let mut writer = BufWriter::new(output);
    let mut bytes = 0;
    let mut first_member = true;

    while has_next_member(&mut reader, first_member)? {
        let mut decoder = GzDecoder::new(&mut reader);
        bytes += io::copy(&mut decoder, &mut writer)?;
        first_member = false;
    }

    writer.flush()?;
    Ok(bytes)
}

/// Returns `true` if another gzip member starts at the reader's position.
///
/// End of input always ends the stream. After the first member, NUL bytes are
/// padding and are consumed; anything else is handed to the decoder, which
/// rejects it if it is not a gzip header.
fn has_next_member<R: BufRead>(reader: &mut R, first_member: bool) -> io::Result<bool> {
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(false);
        }
        if first_member {
            return Ok(true);
        }
        let padding = buf.iter().take_while(|&&b| b == 0).count();
        if padding == 0 {
            return Ok(true);
        }
        reader.consume(padding);
    }
}

fn remove_partial_output(destination: &Path) {
    match fs::remove_file(destination) {
        Ok(()) => debug!("Removed partial output '{}'", destination.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => warn!(
            "Could not remove partial output '{}': {}",
            destination.display(),
            e
        ),
    }
}

/// Copies the access and modification times of `source` onto `destination`.
///
/// This never fails: any error (e.g. a filesystem without timestamp support)
/// is logged and reported as [`MetadataSync::Ignored`].
pub fn propagate_timestamps(source: &Path, destination: &Path) -> MetadataSync {
    let result = fs::metadata(source).and_then(|meta| {
        let atime = FileTime::from_last_access_time(&meta);
        let mtime = FileTime::from_last_modification_time(&meta);
        filetime::set_file_times(destination, atime, mtime)
    });

    match result {
        Ok(()) => MetadataSync::Applied,
        Err(e) => {
            debug!(
                "Ignoring timestamp propagation failure for '{}': {}",
                destination.display(),
                e
            );
            MetadataSync::Ignored {
                reason: e.to_string(),
            }
        }
    }
}
