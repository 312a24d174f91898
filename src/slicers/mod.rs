//! Dialect parsers, one per supported slicer.
//!
//! Each slicer application embeds its per-object metadata in a different
//! comment convention. The parsers here all follow the same contract:
//! consume a rewindable line source, build the object registry during a
//! scan pass, rewind, then re-emit the file with markers injected at the
//! dialect's trigger points. SuperSlicer is the exception — its metadata
//! is self-contained, so a single forward pass suffices.
//!
//! Detection is by the slicer's banner comment at the top of the file,
//! checked in a fixed priority order ([`Slicer::ALL`]).

pub mod cura;
pub mod ideamaker;
pub mod passthrough;
pub mod slic3r;
pub mod superslicer;

use std::fmt;
use std::io::{self, BufRead, Seek, Write};

use crate::error::PrecancelError;
use crate::object::ObjectRegistry;

/// A supported slicer dialect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slicer {
    SuperSlicer,
    PrusaSlicer,
    Slic3r,
    Cura,
    IdeaMaker,
}

impl Slicer {
    /// All dialects, in detection priority order.
    pub const ALL: [Slicer; 5] = [
        Slicer::SuperSlicer,
        Slicer::PrusaSlicer,
        Slicer::Slic3r,
        Slicer::Cura,
        Slicer::IdeaMaker,
    ];

    /// Human-readable name for the dialect.
    pub fn name(&self) -> &'static str {
        match self {
            Slicer::SuperSlicer => "superslicer",
            Slicer::PrusaSlicer => "prusaslicer",
            Slicer::Slic3r => "slic3r",
            Slicer::Cura => "cura",
            Slicer::IdeaMaker => "ideamaker",
        }
    }

    /// The banner comment this slicer writes at the top of its G-code.
    pub fn marker(&self) -> &'static str {
        match self {
            Slicer::SuperSlicer => "; generated by SuperSlicer",
            Slicer::PrusaSlicer => "; generated by PrusaSlicer",
            Slicer::Slic3r => "; generated by Slic3r",
            Slicer::Cura => ";Generated with Cura_SteamEngine",
            Slicer::IdeaMaker => ";Sliced by ideaMaker",
        }
    }

    /// Matches a leading comment line against the known banners.
    pub fn from_comment(line: &str) -> Option<Slicer> {
        let trimmed = line.trim();
        Slicer::ALL
            .into_iter()
            .find(|slicer| trimmed.starts_with(slicer.marker()))
    }

    /// Runs this dialect's parser over `input`, streaming annotated lines
    /// to `output`. Returns the number of objects discovered.
    pub fn preprocess<R, W>(&self, input: &mut R, output: &mut W) -> Result<usize, PrecancelError>
    where
        R: BufRead + Seek,
        W: Write,
    {
        match self {
            Slicer::SuperSlicer => superslicer::preprocess(input, output),
            Slicer::PrusaSlicer | Slicer::Slic3r => slic3r::preprocess(input, output),
            Slicer::Cura => cura::preprocess(input, output),
            Slicer::IdeaMaker => ideamaker::preprocess(input, output),
        }
    }
}

impl fmt::Display for Slicer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reads one raw line including its terminator into `buf`.
///
/// Returns false at end of stream. The buffer is cleared first, so at EOF
/// it comes back empty.
pub(crate) fn read_raw_line<R: BufRead>(input: &mut R, buf: &mut String) -> io::Result<bool> {
    buf.clear();
    Ok(input.read_line(buf)? > 0)
}

/// Writes original lines byte-for-byte and injected markers safely.
///
/// Markers are `\n`-terminated strings; if the line they follow lacked its
/// own terminator (a final unterminated line), a newline is inserted first
/// so the marker never merges into a data line.
pub(crate) struct Emitter<'a, W: Write> {
    output: &'a mut W,
    terminated: bool,
}

impl<'a, W: Write> Emitter<'a, W> {
    pub(crate) fn new(output: &'a mut W) -> Self {
        Self {
            output,
            terminated: true,
        }
    }

    /// Echoes an original line unchanged.
    pub(crate) fn echo(&mut self, line: &str) -> io::Result<()> {
        self.output.write_all(line.as_bytes())?;
        if !line.is_empty() {
            self.terminated = line.ends_with('\n');
        }
        Ok(())
    }

    /// Injects a rendered marker after the current line.
    pub(crate) fn inject(&mut self, marker: &str) -> io::Result<()> {
        if !self.terminated {
            self.output.write_all(b"\n")?;
        }
        self.output.write_all(marker.as_bytes())?;
        self.terminated = true;
        Ok(())
    }
}

/// Resolves a native id to its registered display name.
pub(crate) fn object_name<'a>(
    objects: &'a ObjectRegistry,
    id: &str,
) -> Result<&'a str, PrecancelError> {
    objects
        .get(id)
        .map(|obj| obj.name.as_str())
        .ok_or_else(|| PrecancelError::UnknownObject { id: id.to_string() })
}
