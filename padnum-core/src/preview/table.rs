use crate::renamer::{FailureKind, Outcome, PadReport};
use comfy_table::{Cell, Color, ContentArrangement, Table};

fn status_cell(outcome: &Outcome, use_color: bool) -> Cell {
    let (label, color) = match outcome {
        Outcome::Renamed { .. } => ("Renamed", Color::Green),
        Outcome::Planned { .. } => ("Changed", Color::Green),
        Outcome::Unchanged { .. } => ("Unchanged", Color::DarkGrey),
        Outcome::Skipped { .. } => ("Skipped", Color::DarkGrey),
        Outcome::Failed {
            kind: FailureKind::Conflict,
            ..
        } => ("Conflict", Color::Yellow),
        Outcome::Failed { .. } => ("Failed", Color::Red),
    };

    if use_color {
        Cell::new(label).fg(color)
    } else {
        Cell::new(label)
    }
}

fn note(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Skipped { reason, .. } => reason.as_str().to_string(),
        Outcome::Failed { message, .. } => message.clone(),
        _ => String::new(),
    }
}

/// Render every entry of the report as a Status / Original / New table
pub fn render_table(report: &PadReport, use_color: bool) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Disabled);

    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("Status").fg(Color::Cyan),
            Cell::new("Original").fg(Color::Cyan),
            Cell::new("New").fg(Color::Cyan),
            Cell::new("Note").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["Status", "Original", "New", "Note"]);
    }

    for outcome in &report.outcomes {
        let changes = outcome.original_name() != outcome.final_name();
        let new_name = if changes {
            format!("→ {}", outcome.final_name())
        } else if let Outcome::Failed { to, .. } = outcome {
            format!("✗ {to}")
        } else {
            String::new()
        };

        let new_cell = if use_color && changes {
            Cell::new(new_name).fg(Color::Magenta)
        } else {
            Cell::new(new_name)
        };

        table.add_row(vec![
            status_cell(outcome, use_color),
            Cell::new(outcome.original_name()),
            new_cell,
            Cell::new(note(outcome)),
        ]);
    }

    let changed = report.planned() + report.renamed();
    let totals = format!(
        "{} changed, {} unchanged, {} skipped, {} failed",
        changed,
        report.unchanged(),
        report.skipped(),
        report.failed()
    );
    if use_color {
        table.add_row(vec![
            Cell::new("TOTALS").fg(Color::Cyan),
            Cell::new(totals).fg(Color::White),
            Cell::new(""),
            Cell::new(""),
        ]);
    } else {
        table.add_row(vec!["TOTALS", totals.as_str(), "", ""]);
    }

    table.to_string()
}
