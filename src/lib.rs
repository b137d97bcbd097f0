// src/lib.rs
// =============================================================================
// html-grader as a library.
//
// Everything needed to grade a page lives here so it can be tested and
// reused without going through the command line:
//
//   let checks = load_checks(Path::new("checks.json"))?;
//   let html = read_html_file(Path::new("index.html"))?;
//   let report = check_html(&html, &checks)?;
//   println!("{}", format_report(&report)?);
//
// The binary (src/main.rs) only parses flags and wires these together.
// =============================================================================

pub mod checker;
pub mod checks;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod output;

pub use checker::{check_html, check_html_file, check_html_with, CheckReport, SelectorPolicy};
pub use checks::{load_checks, parse_checks, CHECKS_FILE_DEFAULT};
pub use error::{GraderError, GraderResult};
pub use fetch::{
    assert_exists, download, read_html_file, DownloadOptions, HtmlSource, RetryPolicy,
    HTML_FILE_DEFAULT,
};
pub use logging::Verbosity;
pub use output::{format_report, print_report, write_report};
