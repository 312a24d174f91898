//! The processing pipeline.
//!
//! One file flows through up to four sequential traversals of the same
//! rewindable source:
//!
//! 1. Idempotency pre-scan — any line beginning with `DEFINE_OBJECT`
//!    anywhere means the file is already annotated; it is copied through
//!    unchanged and reported as a success.
//! 2. Detection — the leading blank/comment block is walked for a known
//!    slicer banner; a non-comment line first is fatal.
//! 3. The chosen parser's scan pass (dialect-dependent).
//! 4. The emission pass, streaming annotated lines to the sink.
//!
//! Files are processed independently; a failure aborts only that file.
//! [`process_file`] writes to a scratch temp file and only replaces the
//! destination on success, so a failed run never touches the original.

pub mod report;

pub use report::ProcessReport;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Cursor, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::error::PrecancelError;
use crate::markers;
use crate::slicers::{self, passthrough, Slicer};

/// Annotates one G-code stream.
///
/// `input` must support rewinding to the start; `output` receives the
/// annotated line sequence. On error the output is truncated mid-stream
/// and should be discarded by the caller.
///
/// # Errors
/// [`PrecancelError::DetectionFailed`] when no slicer banner is found in
/// the leading comment block, or any dialect parser error.
pub fn preprocess<R, W>(input: &mut R, output: &mut W) -> Result<ProcessReport, PrecancelError>
where
    R: BufRead + Seek,
    W: Write,
{
    if is_already_processed(input)? {
        input.seek(SeekFrom::Start(0))?;
        passthrough::preprocess(input, output)?;
        return Ok(ProcessReport::already_processed());
    }

    input.seek(SeekFrom::Start(0))?;
    let slicer = detect_slicer(input)?;

    input.seek(SeekFrom::Start(0))?;
    let object_count = slicer.preprocess(input, output)?;

    Ok(ProcessReport::annotated(slicer.name(), object_count))
}

/// Annotates a string. Useful for testing without file I/O.
pub fn preprocess_str(input: &str) -> Result<(String, ProcessReport), PrecancelError> {
    let (bytes, report) = preprocess_slice(input.as_bytes())?;
    let text = String::from_utf8(bytes)
        .map_err(|e| PrecancelError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;
    Ok((text, report))
}

/// Annotates raw bytes. Useful for fuzzing and processing byte buffers
/// without requiring UTF-8 upfront.
pub fn preprocess_slice(input: &[u8]) -> Result<(Vec<u8>, ProcessReport), PrecancelError> {
    let mut cursor = Cursor::new(input);
    let mut output = Vec::new();
    let report = preprocess(&mut cursor, &mut output)?;
    Ok((output, report))
}

/// Scans the whole stream for the idempotency signal.
fn is_already_processed<R: BufRead>(input: &mut R) -> Result<bool, PrecancelError> {
    let mut line = String::new();
    while slicers::read_raw_line(input, &mut line)? {
        if line.starts_with(markers::DEFINE_OBJECT) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Walks the leading blank/comment block looking for a slicer banner.
///
/// # Errors
/// [`PrecancelError::DetectionFailed`] when a non-comment line is reached
/// first, or the stream ends without a match.
pub fn detect_slicer<R: BufRead>(input: &mut R) -> Result<Slicer, PrecancelError> {
    let mut line = String::new();
    while slicers::read_raw_line(input, &mut line)? {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !trimmed.starts_with(';') {
            return Err(PrecancelError::DetectionFailed);
        }
        if let Some(slicer) = Slicer::from_comment(trimmed) {
            return Ok(slicer);
        }
    }
    Err(PrecancelError::DetectionFailed)
}

/// Annotates one file on disk.
///
/// Output goes to a scratch file in the same directory and replaces the
/// destination only on success; on failure the scratch file is discarded
/// and the original is left untouched. Without `output_suffix` the file
/// is rewritten in place; with it, the result lands next to the input as
/// `<stem><suffix>.<ext>`.
pub fn process_file(
    path: &Path,
    output_suffix: Option<&str>,
) -> Result<ProcessReport, PrecancelError> {
    let out_path = output_path(path, output_suffix);

    let mut input = BufReader::new(File::open(path)?);

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut scratch = tempfile::NamedTempFile::new_in(dir)?;

    // An early return here drops the scratch file, deleting it and
    // leaving the original untouched.
    let report = {
        let mut output = BufWriter::new(scratch.as_file_mut());
        let report = preprocess(&mut input, &mut output)?;
        output.flush()?;
        report
    };

    scratch
        .persist(&out_path)
        .map_err(|e| PrecancelError::Io(e.error))?;

    Ok(report)
}

/// The destination path for a given input path and optional suffix.
fn output_path(path: &Path, suffix: Option<&str>) -> PathBuf {
    let Some(suffix) = suffix else {
        return path.to_path_buf();
    };

    let mut name = path.file_stem().map(|s| s.to_os_string()).unwrap_or_default();
    name.push(suffix);
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    path.with_file_name(name)
}
