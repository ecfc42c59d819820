use anyhow::Result;
use padnum_core::{archive_operation, OutputFormatter};
use std::path::Path;

use crate::cli::{OutputFormat, PaddingArgs};

/// Switches of the zip command that do not affect padding itself
pub struct ZipFlags<'a> {
    pub out_dir: Option<&'a Path>,
    pub keep_name: bool,
    pub dry_run: bool,
    pub quiet: bool,
}

pub fn handle_zip(
    archive: &Path,
    padding: &PaddingArgs,
    flags: ZipFlags<'_>,
    output: OutputFormat,
    use_color: bool,
) -> Result<()> {
    let result = archive_operation(
        archive,
        flags.out_dir,
        padding.effective_width(),
        padding.extension.as_deref(),
        flags.keep_name,
        flags.dry_run,
    )?;

    match output {
        OutputFormat::Json => println!("{}", result.format_json()),
        OutputFormat::Summary => {
            if !flags.quiet {
                print!("{}", result.format_summary_with_color(use_color));
            }
        },
    }

    Ok(())
}
