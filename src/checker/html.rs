// src/checker/html.rs
// =============================================================================
// This module checks an HTML page for elements matching CSS selectors.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// The page is parsed once per call and then every selector is run against
// that same document.
// =============================================================================

use super::report::CheckReport;
use crate::error::{GraderError, GraderResult};
use scraper::{Html, Selector};
use std::path::Path;

// What to do with a selector scraper cannot parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectorPolicy {
    /// Stop the whole run with GraderError::InvalidSelector
    #[default]
    Strict,
    /// Report the selector as absent (false) and log a warning
    Lenient,
}

// Checks which selectors match at least one element in the HTML
//
// Parameters:
//   html: the raw HTML content
//   selectors: CSS selectors, in the order they should be reported
//
// Returns: a CheckReport with one entry per distinct selector
//
// Example:
//   html = "<h1>Title</h1>"
//   selectors = ["#missing", "h1"]
//   result = {"#missing": false, "h1": true}
pub fn check_html<S: AsRef<str>>(html: &str, selectors: &[S]) -> GraderResult<CheckReport> {
    check_html_with(html, selectors, SelectorPolicy::Strict)
}

pub fn check_html_with<S: AsRef<str>>(
    html: &str,
    selectors: &[S],
    policy: SelectorPolicy,
) -> GraderResult<CheckReport> {
    let mut report = CheckReport::new();
    if selectors.is_empty() {
        return Ok(report);
    }

    let document = Html::parse_document(html);

    for raw in selectors {
        let raw = raw.as_ref();
        let present = match Selector::parse(raw) {
            Ok(selector) => document.select(&selector).next().is_some(),
            Err(e) => match policy {
                SelectorPolicy::Strict => {
                    return Err(GraderError::InvalidSelector {
                        selector: raw.to_string(),
                        reason: e.to_string(),
                    });
                }
                SelectorPolicy::Lenient => {
                    tracing::warn!(selector = raw, error = %e, "invalid selector, reporting false");
                    false
                }
            },
        };
        tracing::trace!(selector = raw, present, "checked");
        report.insert(raw, present);
    }

    Ok(report)
}

// Reads an HTML file from disk and checks it in one go
pub fn check_html_file<S: AsRef<str>>(path: &Path, selectors: &[S]) -> GraderResult<CheckReport> {
    let html = crate::fetch::read_html_file(path)?;
    check_html(&html, selectors)
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why .next().is_some() instead of counting?
//    - select() returns a lazy iterator over matches
//    - We only need to know whether there is at least one
//    - Stopping at the first match avoids walking the whole tree
//
// 2. Why AsRef<str>?
//    - Callers can pass &[String] (from checks.json) or &[&str] (in tests)
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PAGE: &str = r#"
        <html>
          <head><title>Grader</title><link rel="stylesheet" href="app.css"></head>
          <body>
            <h1>Title</h1>
            <h2 class="sub">Sub</h2>
            <a href="/docs" id="docs">Docs</a>
          </body>
        </html>
    "#;

    #[test]
    fn test_present_and_absent() {
        let report = check_html("<h1>Title</h1><h2>Sub</h2>", &["#missing", "h1", "h2"]).unwrap();
        assert_eq!(report.get("#missing"), Some(false));
        assert_eq!(report.get("h1"), Some(true));
        assert_eq!(report.get("h2"), Some(true));
    }

    #[test]
    fn test_attribute_and_class_selectors() {
        let report = check_html(
            PAGE,
            &["link[rel=stylesheet]", "h2.sub", "a#docs[href]", "script[src]", "title"],
        )
        .unwrap();
        let found: Vec<_> = report.iter().collect();
        assert_eq!(
            found,
            vec![
                ("link[rel=stylesheet]", true),
                ("h2.sub", true),
                ("a#docs[href]", true),
                ("script[src]", false),
                ("title", true),
            ]
        );
    }

    #[test]
    fn test_empty_selector_list() {
        let selectors: Vec<String> = Vec::new();
        assert!(check_html(PAGE, &selectors).unwrap().is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        let report = check_html(PAGE, &["h1", "h1", "p"]).unwrap();
        assert_eq!(report.len(), 2);
        assert_eq!(report.get("h1"), Some(true));
    }

    #[test]
    fn test_invalid_selector_is_fatal_by_default() {
        let err = check_html(PAGE, &["h1", "h1[["]).unwrap_err();
        match err {
            GraderError::InvalidSelector { selector, .. } => assert_eq!(selector, "h1[["),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_selector_lenient() {
        let report = check_html_with(PAGE, &["h1", "h1[["], SelectorPolicy::Lenient).unwrap();
        assert_eq!(report.get("h1"), Some(true));
        assert_eq!(report.get("h1[["), Some(false));
    }

    #[test]
    fn test_check_html_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        std::fs::write(&path, PAGE).unwrap();
        let report = check_html_file(&path, &["body", "table"]).unwrap();
        assert_eq!(report.get("body"), Some(true));
        assert_eq!(report.get("table"), Some(false));
    }
}
