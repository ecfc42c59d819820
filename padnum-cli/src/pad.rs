use anyhow::Result;
use padnum_core::{pad_operation, OutputFormatter};

use crate::cli::{OutputFormat, TargetArgs};

pub fn handle_pad(
    target: &TargetArgs,
    dry_run: bool,
    output: OutputFormat,
    quiet: bool,
    use_color: bool,
) -> Result<()> {
    let report = pad_operation(
        &target.directory,
        target.padding.effective_width(),
        target.padding.extension.as_deref(),
        dry_run,
    )?;

    match output {
        OutputFormat::Json => {
            println!("{}", report.format_json());
        },
        OutputFormat::Summary => {
            if !quiet {
                print!("{}", report.format_summary_with_color(use_color));
            }
        },
    }

    Ok(())
}
