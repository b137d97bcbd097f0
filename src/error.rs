// src/error.rs
// =============================================================================
// Error type shared by every part of the library.
//
// The binary (main.rs) works with anyhow::Result, but library functions return
// GraderError so callers and tests can match on what went wrong.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraderError {
    /// A file named on the command line is not there.
    /// The message is printed verbatim before exiting.
    #[error("{} does not exist. Exiting.", .0.display())]
    MissingFile(PathBuf),

    /// Reading a file failed for any other reason
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// checks.json is not a JSON array of strings
    #[error("invalid checks file {}: {source}", .path.display())]
    ChecksFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Every download attempt failed (or the server refused outright)
    #[error("{url}: {reason} (after {attempts} attempt(s))")]
    Download {
        url: String,
        attempts: u32,
        reason: String,
    },

    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("could not serialize report: {0}")]
    Report(#[from] serde_json::Error),

    /// Writing the report to stdout failed
    #[error("could not write report: {0}")]
    Output(#[from] std::io::Error),
}

pub type GraderResult<T> = Result<T, GraderError>;
