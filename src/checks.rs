// src/checks.rs
// =============================================================================
// This module loads the list of checks (CSS selectors) from a JSON file.
//
// The file is a plain JSON array of strings:
//   ["h1", "#missing", "link[rel=stylesheet]"]
//
// The selectors are returned sorted so the report always comes out in the
// same order, no matter how the file was written.
// =============================================================================

use crate::error::{GraderError, GraderResult};
use std::fs;
use std::path::Path;

/// Default checks file used when --checks is not given.
pub const CHECKS_FILE_DEFAULT: &str = "checks.json";

// Reads a checks file and returns its selectors in sorted order
//
// Errors:
//   GraderError::Io           - the file could not be read
//   GraderError::ChecksFormat - the content is not a JSON array of strings
pub fn load_checks(path: &Path) -> GraderResult<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| GraderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let checks = parse_checks(&content).map_err(|source| GraderError::ChecksFormat {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), count = checks.len(), "loaded checks");
    Ok(checks)
}

// Parses the JSON text of a checks file
//
// Duplicates are kept; they collapse into a single key once checked.
pub fn parse_checks(content: &str) -> Result<Vec<String>, serde_json::Error> {
    let mut checks: Vec<String> = serde_json::from_str(content)?;
    checks.sort();
    Ok(checks)
}
