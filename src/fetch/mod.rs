// src/fetch/mod.rs
// =============================================================================
// This module gets the HTML we are going to check.
//
// There are two ways to get it, and exactly one is used per run:
// - file: read a local file (index.html by default)
// - http: download a URL, with a bounded number of retries
//
// HtmlSource names which one a run uses.
// =============================================================================

mod file;
mod http;

pub use file::{assert_exists, read_html_file, HTML_FILE_DEFAULT};
pub use http::{download, DownloadOptions, RetryPolicy};

use crate::error::GraderResult;
use std::path::PathBuf;
use url::Url;

/// Where the HTML for this run comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlSource {
    File(PathBuf),
    Url(Url),
}

impl HtmlSource {
    /// Fetches the raw HTML from whichever source this is.
    pub async fn acquire(&self, options: &DownloadOptions) -> GraderResult<String> {
        match self {
            HtmlSource::File(path) => read_html_file(path),
            HtmlSource::Url(url) => download(url, options).await,
        }
    }
}

impl std::fmt::Display for HtmlSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HtmlSource::File(path) => write!(f, "{}", path.display()),
            HtmlSource::Url(url) => write!(f, "{url}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_acquire_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        std::fs::write(&path, "<h1>Title</h1>").unwrap();

        let source = HtmlSource::File(path);
        let html = source.acquire(&DownloadOptions::default()).await.unwrap();
        assert_eq!(html, "<h1>Title</h1>");
    }

    #[test]
    fn test_display() {
        let url = Url::parse("https://example.com/").unwrap();
        assert_eq!(HtmlSource::Url(url).to_string(), "https://example.com/");
        assert_eq!(HtmlSource::File(PathBuf::from("index.html")).to_string(), "index.html");
    }
}
