//! Precancel: G-code preprocessing for per-object print cancellation.
//!
//! 3D-printer firmware can skip or cancel an individual object mid-job if
//! the G-code stream carries markers delimiting each object's extent and
//! print window. Slicers emit that metadata in incompatible comment
//! dialects; precancel detects the dialect and re-streams the file with
//! one common marker vocabulary (`DEFINE_OBJECT`, `START_CURRENT_OBJECT`,
//! `END_CURRENT_OBJECT`) injected.
//!
//! # Modules
//!
//! - [`preprocess`]: the pipeline — idempotency guard, detection, dispatch
//! - [`slicers`]: the five dialect parsers and slicer detection
//! - [`object`]: per-object model (points, hulls, the registry)
//! - [`markers`]: the common marker vocabulary and name sanitization
//! - [`gcode`]: extrusion-move parsing shared by the dialects
//! - [`error`]: error types for precancel operations

pub mod error;
pub mod gcode;
pub mod markers;
pub mod object;
pub mod preprocess;
pub mod slicers;

use std::path::PathBuf;

use clap::Parser;

pub use error::PrecancelError;

/// The precancel CLI application.
#[derive(Parser)]
#[command(name = "precancel")]
#[command(version, author, about)]
struct Cli {
    /// G-code files to annotate.
    gcode: Vec<PathBuf>,

    /// Add a suffix to the output file name; without this, files are
    /// rewritten in place.
    #[arg(long, short = 'o', allow_hyphen_values = true)]
    output_suffix: Option<String>,
}

/// Run the precancel CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
/// Files are processed independently; one failure does not stop the
/// rest, but any failure makes the overall run fail.
pub fn run() -> Result<(), PrecancelError> {
    let cli = Cli::parse();

    if cli.gcode.is_empty() {
        // No files: just print a usage hint and exit successfully.
        println!("precancel {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("G-code preprocessor for per-object print cancellation.");
        println!();
        println!("Run 'precancel --help' for usage information.");
        return Ok(());
    }

    let total = cli.gcode.len();
    let mut failed = 0usize;

    for path in &cli.gcode {
        match preprocess::process_file(path, cli.output_suffix.as_deref()) {
            Ok(report) => println!("{}: {}", path.display(), report),
            Err(err) => {
                eprintln!("{}: {}", path.display(), err);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        Err(PrecancelError::BatchFailed { failed, total })
    } else {
        Ok(())
    }
}
