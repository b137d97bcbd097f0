// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things). Every flag can also be
// set through an HTML_GRADER_* environment variable.
//
// --checks and --file are kept as Option so we can tell "given on the
// command line" apart from "fell back to the default"; only files that
// were asked for explicitly (or are actually going to be read) get the
// "does not exist" pre-flight check.
// =============================================================================

use clap::Parser;
use html_grader::{
    DownloadOptions, HtmlSource, RetryPolicy, SelectorPolicy, Verbosity, CHECKS_FILE_DEFAULT,
    HTML_FILE_DEFAULT,
};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

#[derive(Parser, Debug)]
#[command(
    name = "html-grader",
    version,
    about = "Check an HTML page for elements matching a list of CSS selectors",
    long_about = "html-grader loads a JSON array of CSS selectors, runs each one against an HTML \
                  page (a local file or a URL) and prints a JSON object mapping every selector \
                  to whether it matched at least one element."
)]
pub struct Cli {
    /// Path to the checks file, a JSON array of selectors [default: checks.json]
    #[arg(short, long, value_name = "CHECK_FILE", env = "HTML_GRADER_CHECKS")]
    pub checks: Option<PathBuf>,

    /// Path to the HTML file to check [default: index.html]
    #[arg(short, long, value_name = "HTML_FILE", env = "HTML_GRADER_FILE")]
    pub file: Option<PathBuf>,

    /// Download the HTML from this URL instead of reading a file
    #[arg(short, long, env = "HTML_GRADER_URL")]
    pub url: Option<Url>,

    /// Maximum number of download attempts
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    pub retries: u32,

    /// Seconds to wait between download attempts
    #[arg(long, value_name = "SECS", default_value_t = 5)]
    pub retry_delay: u64,

    /// Per-request HTTP timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Report selectors that fail to parse as `false` instead of aborting
    #[arg(long)]
    pub lenient: bool,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn checks_path(&self) -> PathBuf {
        self.checks
            .clone()
            .unwrap_or_else(|| PathBuf::from(CHECKS_FILE_DEFAULT))
    }

    // A URL always wins over a file
    pub fn html_source(&self) -> HtmlSource {
        match (&self.url, &self.file) {
            (Some(url), _) => HtmlSource::Url(url.clone()),
            (None, Some(path)) => HtmlSource::File(path.clone()),
            (None, None) => HtmlSource::File(PathBuf::from(HTML_FILE_DEFAULT)),
        }
    }

    // Files that must exist before we do anything else
    //
    // The checks file is always read. The HTML file is validated when it
    // was given explicitly, even alongside --url, or when it is the source.
    pub fn files_to_validate(&self) -> Vec<PathBuf> {
        let mut files = vec![self.checks_path()];
        match (&self.file, self.html_source()) {
            (Some(path), _) => files.push(path.clone()),
            (None, HtmlSource::File(path)) => files.push(path),
            (None, HtmlSource::Url(_)) => {}
        }
        files
    }

    pub fn download_options(&self) -> DownloadOptions {
        DownloadOptions {
            retry: RetryPolicy::new(self.retries, Duration::from_secs(self.retry_delay)),
            timeout: Duration::from_secs(self.timeout),
        }
    }

    pub fn selector_policy(&self) -> SelectorPolicy {
        if self.lenient {
            SelectorPolicy::Lenient
        } else {
            SelectorPolicy::Strict
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from(self.verbose)
    }
}
