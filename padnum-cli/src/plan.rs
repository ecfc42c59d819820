use anyhow::Result;
use padnum_core::{plan_operation, OutputFormatter, Preview};

use crate::cli::{OutputFormat, PreviewArg, TargetArgs};

pub fn handle_plan(
    target: &TargetArgs,
    preview: PreviewArg,
    output: OutputFormat,
    use_color: bool,
) -> Result<()> {
    // No preview for JSON output
    let preview = match output {
        OutputFormat::Json => None,
        OutputFormat::Summary => Some(Preview::from(preview)),
    };

    let (report, rendered) = plan_operation(
        &target.directory,
        target.padding.effective_width(),
        target.padding.extension.as_deref(),
        preview,
        Some(use_color),
    )?;

    match output {
        OutputFormat::Json => println!("{}", report.format_json()),
        OutputFormat::Summary => {
            if let Some(rendered) = rendered {
                println!("{}", rendered.trim_end());
            }
            println!("Files that would be renamed: {}", report.planned());
            if report.failed() > 0 {
                println!("Conflicts: {}", report.failed());
            }
        },
    }

    Ok(())
}
