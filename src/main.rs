// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Make sure the files we were pointed at exist (exit 1 if not)
// 3. Get the HTML from a file or a URL
// 4. Load the checks, run them, print the JSON report
// 5. Exit with proper code (0 = report printed, 1 = anything went wrong,
//    including a bad command line)
//
// Nothing is printed on stdout unless the whole run succeeded.
// =============================================================================

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use html_grader::{assert_exists, check_html_with, load_checks, logging, print_report, GraderError};

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Usage errors exit 1 like every other failure; --help and --version exit 0
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };
    logging::init(cli.verbosity());

    let exit_code = match run(&cli).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{}", diagnostic(&e));
            1
        }
    };

    std::process::exit(exit_code);
}

// Runs one grading pass
async fn run(cli: &Cli) -> Result<()> {
    // Pre-flight: fail before touching the network or the parser
    for path in cli.files_to_validate() {
        assert_exists(&path)?;
    }

    let source = cli.html_source();
    tracing::info!(%source, "grading");
    let html = source.acquire(&cli.download_options()).await?;

    let checks = load_checks(&cli.checks_path())?;
    let report = check_html_with(&html, &checks, cli.selector_policy())?;
    tracing::info!(checks = report.len(), "checks complete");

    print_report(&report)?;
    Ok(())
}

// One line describing why the run failed
fn diagnostic(e: &anyhow::Error) -> String {
    match e.downcast_ref::<GraderError>() {
        Some(err @ GraderError::MissingFile(_)) => err.to_string(),
        Some(err @ GraderError::Download { .. }) => format!("Error getting html: {}", err),
        _ => format!("Error: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_file_diagnostic_is_verbatim() {
        let e = anyhow::Error::new(GraderError::MissingFile(PathBuf::from("checks.json")));
        assert_eq!(diagnostic(&e), "checks.json does not exist. Exiting.");
    }

    #[test]
    fn test_download_diagnostic() {
        let e = anyhow::Error::new(GraderError::Download {
            url: "http://example.invalid/".to_string(),
            attempts: 3,
            reason: "Could not resolve hostname".to_string(),
        });
        assert_eq!(
            diagnostic(&e),
            "Error getting html: http://example.invalid/: Could not resolve hostname (after 3 attempt(s))"
        );
    }

    #[test]
    fn test_other_errors_are_prefixed() {
        let e = anyhow::Error::new(GraderError::InvalidSelector {
            selector: "h1[[".to_string(),
            reason: "bad".to_string(),
        });
        assert_eq!(diagnostic(&e), "Error: invalid selector 'h1[[': bad");
    }
}
