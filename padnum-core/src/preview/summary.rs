use crate::renamer::{FailureKind, Outcome, PadReport};
use std::fmt::Write;

/// Render the report as a plain, line-oriented listing
pub fn render_summary(report: &PadReport) -> String {
    let mut output = String::new();

    writeln!(output, "[PAD SUMMARY]").unwrap();
    writeln!(output, "Directory: {}", report.directory.display()).unwrap();
    writeln!(output, "Width: {}", report.width).unwrap();
    if let Some(extension) = &report.extension {
        writeln!(output, "Extension: {}", extension).unwrap();
    }
    writeln!(output).unwrap();

    for outcome in &report.outcomes {
        match outcome {
            Outcome::Renamed { from, to } => {
                writeln!(output, "renamed: {} -> {}", from, to).unwrap();
            },
            Outcome::Planned { from, to } => {
                writeln!(output, "rename: {} -> {}", from, to).unwrap();
            },
            Outcome::Unchanged { name } => {
                writeln!(output, "unchanged: {}", name).unwrap();
            },
            Outcome::Skipped { name, reason } => {
                writeln!(output, "skipped: {} ({})", name, reason.as_str()).unwrap();
            },
            Outcome::Failed {
                from,
                to,
                kind,
                message,
            } => {
                let label = match kind {
                    FailureKind::Conflict => "conflict",
                    FailureKind::Io => "failed",
                };
                writeln!(output, "{}: {} -> {} ({})", label, from, to, message).unwrap();
            },
        }
    }

    output
}
