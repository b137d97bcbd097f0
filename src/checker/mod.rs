// src/checker/mod.rs
// =============================================================================
// This module runs the checks against an HTML page.
//
// Submodules:
// - html: Parses the page and evaluates each CSS selector
// - report: The selector -> bool mapping that comes out of a run
// =============================================================================

mod html;
mod report;

pub use html::{check_html, check_html_file, check_html_with, SelectorPolicy};
pub use report::CheckReport;
