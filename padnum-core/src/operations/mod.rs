//! High-level operations that correspond to CLI commands
//!
//! These modules contain the business logic for each padnum command,
//! separated from CLI concerns like argument parsing and printing.

pub mod archive;
pub mod pad;
pub mod plan;

pub use archive::archive_operation;
pub use pad::pad_operation;
pub use plan::plan_operation;

use crate::renamer::{PadOptions, PadReport, Renamer};
use anyhow::Result;

/// Run the renamer on the local filesystem, logging under `operation`.
fn run_logged(operation: &'static str, options: &PadOptions) -> Result<PadReport> {
    tracing::info!(
        operation,
        directory = %options.directory.display(),
        width = options.width,
        extension = options.extension.as_deref().unwrap_or(""),
        dry_run = options.dry_run,
        "starting {operation} run"
    );

    let report = Renamer::local().run(options)?;

    tracing::info!(
        operation,
        renamed = report.renamed(),
        planned = report.planned(),
        failed = report.failed(),
        "{operation} run finished"
    );

    Ok(report)
}
