use thiserror::Error;

/// The main error type for precancel operations.
///
/// Every variant is fatal for the file being processed; none of them are
/// retryable, since all of them stem from malformed or unexpected input
/// rather than transient conditions.
#[derive(Debug, Error)]
pub enum PrecancelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("reached the end of the leading comments without finding a slicer marker")]
    DetectionFailed,

    #[error("failed to parse object metadata from '{line}': {source}")]
    ObjectMetadataParse {
        line: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("marker references unknown object '{id}'")]
    UnknownObject { id: String },

    #[error("expected a ;PRINTING_ID: line after ;PRINTING:, found '{line}'")]
    ObjectPairing { line: String },

    #[error("invalid object count in '{line}'")]
    InvalidObjectCount { line: String },

    #[error("declared object count {declared} does not match the {found} object(s) found")]
    ObjectCountMismatch { declared: usize, found: usize },

    #[error("malformed coordinate in move line '{line}'")]
    MalformedMove { line: String },

    #[error("{failed} of {total} file(s) failed")]
    BatchFailed { failed: usize, total: usize },
}
