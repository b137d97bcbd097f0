// src/output.rs
// =============================================================================
// This module turns a CheckReport into the JSON we print on stdout.
//
// The output is a pretty-printed JSON object indented with 4 spaces:
//   {
//       "#missing": false,
//       "h1": true
//   }
// =============================================================================

use crate::checker::CheckReport;
use crate::error::GraderResult;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::Write;

const INDENT: &[u8] = b"    ";

// Formats the report as 4-space indented JSON (no trailing newline)
pub fn format_report(report: &CheckReport) -> GraderResult<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    report.serialize(&mut serializer)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

// Writes the formatted report followed by a newline
pub fn write_report<W: Write>(out: &mut W, report: &CheckReport) -> GraderResult<()> {
    let json = format_report(report)?;
    writeln!(out, "{}", json)?;
    out.flush()?;
    Ok(())
}

pub fn print_report(report: &CheckReport) -> GraderResult<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write_report(&mut lock, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_uses_four_spaces() {
        let mut report = CheckReport::new();
        report.insert("#missing", false);
        report.insert("h1", true);
        report.insert("h2", true);
        assert_eq!(
            format_report(&report).unwrap(),
            "{\n    \"#missing\": false,\n    \"h1\": true,\n    \"h2\": true\n}"
        );
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(format_report(&CheckReport::new()).unwrap(), "{}");
    }

    #[test]
    fn test_write_report_adds_newline() {
        let mut report = CheckReport::new();
        report.insert("a[href]", true);
        let mut out = Vec::new();
        write_report(&mut out, &report).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\n    \"a[href]\": true\n}\n");
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_an_output_error() {
        let err = write_report(&mut ClosedPipe, &CheckReport::new()).unwrap_err();
        assert!(matches!(err, crate::error::GraderError::Output(_)));
    }

    #[test]
    fn test_selector_quotes_are_escaped() {
        let mut report = CheckReport::new();
        report.insert(r#"meta[name="viewport"]"#, false);
        assert_eq!(
            format_report(&report).unwrap(),
            "{\n    \"meta[name=\\\"viewport\\\"]\": false\n}"
        );
    }
}
