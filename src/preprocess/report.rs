//! Per-file processing report.
//!
//! The pipeline reports what it did through an explicit value rather than
//! ambient logging state: the detected slicer, how many objects were
//! found, and whether the file was already annotated.

use serde::Serialize;
use std::fmt;

/// What happened to one input file.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ProcessReport {
    /// Detected slicer dialect name, if detection ran.
    pub slicer: Option<String>,
    /// Number of distinct objects discovered and defined.
    pub object_count: usize,
    /// True when the file already carried markers and was copied through.
    pub already_processed: bool,
}

impl ProcessReport {
    /// Report for a file that was already annotated.
    pub fn already_processed() -> Self {
        Self {
            already_processed: true,
            ..Default::default()
        }
    }

    /// Report for a freshly annotated file.
    pub fn annotated(slicer: impl Into<String>, object_count: usize) -> Self {
        Self {
            slicer: Some(slicer.into()),
            object_count,
            already_processed: false,
        }
    }
}

impl fmt::Display for ProcessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.already_processed {
            return write!(f, "already annotated, copied through unchanged");
        }
        match &self.slicer {
            Some(slicer) => write!(
                f,
                "{} file annotated, {} object(s) defined",
                slicer, self.object_count
            ),
            None => write!(f, "no slicer detected"),
        }
    }
}
