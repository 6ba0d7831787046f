//! Report formatting and printing.
//!
//! Separate from the pipeline so resgen can be used as a library without
//! printing side effects. Output follows the cargo diagnostic style:
//! severity and message, a `-->` line with the offending path, optional
//! notes, then a summary.

use std::io::{self, Write};

use colored::Colorize;

use crate::issue::{Issue, Severity, error_count, warning_count};

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print all issues in cargo-style format to stdout.
pub fn print_report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer. Issues are sorted before printing
/// so the report order is stable.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    for issue in &sorted {
        let severity_str = match issue.severity() {
            Severity::Error => "error".bold().red(),
            Severity::Warning => "warning".bold().yellow(),
        };

        let _ = writeln!(
            writer,
            "{}: {}  {}",
            severity_str,
            issue.message(),
            issue.rule().to_string().dimmed().cyan()
        );
        let _ = writeln!(writer, "  {} {}", "-->".blue(), issue.path());
        if let Some(note) = issue.note() {
            let _ = writeln!(writer, "  {} {} {}", "=".blue(), "note:".bold(), note);
        }
        let _ = writeln!(writer);
    }

    print_summary(&sorted, writer);
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let errors = error_count(issues);
    let warnings = warning_count(issues);

    let mut parts = Vec::new();
    if errors > 0 {
        parts.push(format!("{} error{}", errors, plural(errors)));
    }
    if warnings > 0 {
        parts.push(format!("{} warning{}", warnings, plural(warnings)));
    }

    let summary = format!("found {}", parts.join(", "));
    let mark = if errors > 0 {
        format!("{} {}", FAILURE_MARK.red(), summary.red())
    } else {
        format!("{} {}", FAILURE_MARK.yellow(), summary.yellow())
    };
    let _ = writeln!(writer, "{}", mark);
}

/// Print the one-line success summary after a generation run.
pub fn print_generate_success(resources: usize, groups: usize, files_written: usize) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "generated {} accessor{} in {} group{} ({} file{} written)",
            resources,
            plural(resources),
            groups,
            plural(groups),
            files_written,
            plural(files_written)
        )
        .green()
    );
}

/// Print the one-line success summary after a check run.
pub fn print_check_success(resources: usize, files_checked: usize) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "checked {} resource{} from {} file{}, no issues found",
            resources,
            plural(resources),
            files_checked,
            plural(files_checked)
        )
        .green()
    );
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
