use crate::archive::{pad_archive, ArchiveOptions, ArchiveReport};
use anyhow::Result;
use std::path::Path;

/// Archive operation - writes a padded copy of a zip archive
///
/// The copy lands in `out_dir` (default: next to `input`) as
/// `renamed_images_pad{width}.zip`, or under the input's own file name when
/// `keep_name` is set.
pub fn archive_operation(
    input: &Path,
    out_dir: Option<&Path>,
    width: usize,
    extension: Option<&str>,
    keep_name: bool,
    dry_run: bool,
) -> Result<ArchiveReport> {
    let output = ArchiveOptions::output_path(input, out_dir, width, keep_name);
    let options = ArchiveOptions::new(input, output)
        .width(width)
        .extension(extension)
        .dry_run(dry_run);

    tracing::info!(
        operation = "zip",
        archive = %input.display(),
        output = %options.output.display(),
        width,
        dry_run,
        "starting zip run"
    );

    let result = pad_archive(&options)?;

    tracing::info!(
        operation = "zip",
        renamed = result.report.renamed(),
        planned = result.report.planned(),
        failed = result.report.failed(),
        "zip run finished"
    );

    Ok(result)
}
