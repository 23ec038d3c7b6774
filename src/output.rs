//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ```text
//! Generated index.html (2 featured)
//! Generated projects.html (3 cards in 2 year groups)
//! Generated people.html (4 members, 3 alumni)
//! 5 records
//!
//! Warnings
//!     iccv21act.txt:2: line has no '::' field separator
//! ```

use crate::generate::BuildReport;
use crate::store::Diagnostic;

/// Format a completed build: one line per page, a record total, and any
/// malformed-line warnings.
pub fn format_build_report(report: &BuildReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .pages
        .iter()
        .map(|page| format!("Generated {} ({})", page.file, page.detail))
        .collect();
    lines.push(format!("{} records", report.records));
    lines.extend(format_diagnostics(&report.diagnostics));
    lines
}

/// Format a `check` run: what each page would contain, plus warnings.
pub fn format_check_report(report: &BuildReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .pages
        .iter()
        .map(|page| format!("{} ok ({})", page.file, page.detail))
        .collect();
    lines.push(format!("{} records", report.records));
    lines.extend(format_diagnostics(&report.diagnostics));
    lines
}

fn format_diagnostics(diagnostics: &[Diagnostic]) -> Vec<String> {
    if diagnostics.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![String::new(), "Warnings".to_string()];
    for d in diagnostics {
        lines.push(format!(
            "    {}.txt:{}: line has no '::' field separator",
            d.record_id, d.line
        ));
    }
    lines
}

pub fn print_build_report(report: &BuildReport) {
    for line in format_build_report(report) {
        println!("{line}");
    }
}

pub fn print_check_report(report: &BuildReport) {
    for line in format_check_report(report) {
        println!("{line}");
    }
}
