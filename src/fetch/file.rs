// src/fetch/file.rs
// =============================================================================
// Reading HTML (and checking files exist) on the local filesystem.
// =============================================================================

use crate::error::{GraderError, GraderResult};
use std::fs;
use std::path::Path;

/// Default HTML file used when neither --file nor --url is given.
pub const HTML_FILE_DEFAULT: &str = "index.html";

// Fails with GraderError::MissingFile if nothing exists at `path`
//
// This is a blocking check on purpose: it has to finish before we decide
// how to get the HTML.
pub fn assert_exists(path: &Path) -> GraderResult<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(GraderError::MissingFile(path.to_path_buf()))
    }
}

// Reads an HTML file into a String
//
// Bytes that are not valid UTF-8 are replaced rather than rejected;
// the HTML parser copes with the replacement characters.
pub fn read_html_file(path: &Path) -> GraderResult<String> {
    let bytes = fs::read(path).map_err(|source| GraderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read html file");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_exists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        assert!(matches!(assert_exists(&path), Err(GraderError::MissingFile(_))));

        fs::write(&path, "<p>hi</p>").unwrap();
        assert!(assert_exists(&path).is_ok());
    }

    #[test]
    fn test_read_html_file_lossy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        fs::write(&path, b"<p>caf\xe9</p>").unwrap();
        let html = read_html_file(&path).unwrap();
        assert!(html.starts_with("<p>caf"));
        assert!(html.ends_with("</p>"));
    }
}
