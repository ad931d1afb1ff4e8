//! Output Rendering
//!
//! The success line goes to stdout; diagnostics go to stderr and are gated
//! by verbosity.

use crate::application::RewriteReport;
use crate::config::Verbosity;

/// Message printed after a successful rewrite
pub const SUCCESS_MESSAGE: &str = "File updated successfully";

/// Build the `--json` event for a finished rewrite
pub fn report_json(report: &RewriteReport) -> serde_json::Value {
    serde_json::json!({
        "event": "fix_includes",
        "status": "success",
        "path": report.path.display().to_string(),
        "lines_in": report.lines_in,
        "lines_replaced": report.lines_replaced,
        "lines_kept": report.lines_kept,
        "changed": report.changed(),
        "before": report.before.as_str(),
        "after": report.after.as_str(),
    })
}

/// Diagnostic lines for a finished rewrite at the given verbosity
pub fn report_diagnostics(report: &RewriteReport, verbosity: Verbosity) -> Vec<String> {
    let mut lines = Vec::new();
    if verbosity < Verbosity::Normal {
        return lines;
    }

    if report.was_short() {
        lines.push(format!(
            "⚠ {} had only {} lines; it now holds just the include block",
            report.path.display(),
            report.lines_in
        ));
    }

    if verbosity >= Verbosity::Verbose {
        lines.push(format!(
            "→ {}: replaced {} lines, kept {}",
            report.path.display(),
            report.lines_replaced,
            report.lines_kept
        ));
        if !report.changed() {
            lines.push("○ header was already in order".to_string());
        }
    }

    if verbosity >= Verbosity::Debug {
        lines.push(format!("  before: {}", report.before));
        lines.push(format!("  after:  {}", report.after));
    }

    lines
}

/// Print the result: JSON on stdout, or the success line plus diagnostics
pub fn render(report: &RewriteReport, verbosity: Verbosity, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(&report_json(report))?);
        return Ok(());
    }

    for line in report_diagnostics(report, verbosity) {
        eprintln!("{}", line);
    }
    println!("{}", SUCCESS_MESSAGE);
    Ok(())
}
