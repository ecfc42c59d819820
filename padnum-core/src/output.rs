use crate::archive::ArchiveReport;
use crate::renamer::{Outcome, PadReport};
use nu_ansi_term::Color;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt::Write;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

const RULE: &str = "------------------------------";

impl PadReport {
    fn operation(&self) -> &'static str {
        if self.dry_run {
            "plan"
        } else {
            "pad"
        }
    }

    /// Human-readable run log: banner, one line per rename or failure,
    /// and the final tally.
    pub fn format_summary_with_color(&self, use_color: bool) -> String {
        let paint = |color: Color, text: String| {
            if use_color {
                color.paint(text).to_string()
            } else {
                text
            }
        };

        let mut output = String::new();
        writeln!(
            output,
            "Padding numeric prefixes in: {}",
            self.directory.display()
        )
        .unwrap();
        writeln!(output, "{RULE}").unwrap();

        for outcome in &self.outcomes {
            match outcome {
                Outcome::Renamed { from, to } => {
                    let line = format!("Renamed: '{from}' -> '{to}'");
                    writeln!(output, "{}", paint(Color::Green, line)).unwrap();
                },
                Outcome::Planned { from, to } => {
                    let line = format!("Would rename: '{from}' -> '{to}'");
                    writeln!(output, "{}", paint(Color::Cyan, line)).unwrap();
                },
                Outcome::Failed { from, message, .. } => {
                    let line = if self.dry_run {
                        format!("Cannot rename '{from}': {message}")
                    } else {
                        format!("Error renaming '{from}': {message}")
                    };
                    writeln!(output, "{}", paint(Color::Red, line)).unwrap();
                },
                Outcome::Unchanged { .. } | Outcome::Skipped { .. } => {},
            }
        }

        writeln!(output, "{RULE}").unwrap();
        if self.dry_run {
            writeln!(output, "Dry run. Files that would be renamed: {}", self.planned()).unwrap();
        } else {
            writeln!(output, "Done. Files renamed: {}", self.renamed()).unwrap();
        }
        if self.failed() > 0 {
            let line = format!("Failed: {}", self.failed());
            writeln!(output, "{}", paint(Color::Yellow, line)).unwrap();
        }

        output
    }
}

impl PadReport {
    fn json_value(&self) -> Value {
        json!({
            "success": true,
            "operation": self.operation(),
            "directory": self.directory,
            "width": self.width,
            "extension": self.extension,
            "dry_run": self.dry_run,
            "summary": {
                "renamed": self.renamed(),
                "planned": self.planned(),
                "unchanged": self.unchanged(),
                "skipped": self.skipped(),
                "failed": self.failed(),
            },
            "entries": self.outcomes,
        })
    }
}

impl OutputFormatter for PadReport {
    fn format_json(&self) -> String {
        serde_json::to_string(&self.json_value()).unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        self.format_summary_with_color(false)
    }
}

impl ArchiveReport {
    pub fn format_summary_with_color(&self, use_color: bool) -> String {
        let mut output = self.report.format_summary_with_color(use_color);
        if self.written {
            writeln!(output, "Wrote: {}", self.output.display()).unwrap();
        } else {
            writeln!(output, "Would write: {}", self.output.display()).unwrap();
        }
        output
    }
}

impl OutputFormatter for ArchiveReport {
    fn format_json(&self) -> String {
        let mut value = self.report.json_value();
        value["operation"] = json!("zip");
        value["archive"] = json!(self.report.directory);
        value["output"] = json!(self.output);
        value["written"] = json!(self.written);
        if let Some(object) = value.as_object_mut() {
            object.remove("directory");
        }
        serde_json::to_string(&value).unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        self.format_summary_with_color(false)
    }
}

impl OutputFormatter for VersionResult {
    fn format_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}
