//! CLI argument parsing and user-facing status output.
//!
//! Uses clap derive macros for argument definitions.

pub mod args;

use std::path::Path;

use keymint::BatchReport;

/// One-line summary of a finished run.
pub fn summary_line(report: &BatchReport, path: &Path) -> String {
    use colored::Colorize;

    let mut line = format!(
        "  {} Wrote {} key(s) to {}",
        "✔".green().bold(),
        report.keys.to_string().bold(),
        path.display(),
    );
    if report.collisions > 0 {
        line.push_str(
            &format!(" ({} duplicate(s) regenerated)", report.collisions)
                .dimmed()
                .to_string(),
        );
    }
    line
}

/// Print the summary to stderr.
pub fn print_summary(report: &BatchReport, path: &Path) {
    use std::io::Write;
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = writeln!(handle, "{}", summary_line(report, path));
    let _ = handle.flush();
}
