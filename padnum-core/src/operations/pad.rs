use crate::renamer::{PadOptions, PadReport};
use anyhow::Result;
use std::path::Path;

/// Pad operation - renames entries in place and returns the full report
pub fn pad_operation(
    directory: &Path,
    width: usize,
    extension: Option<&str>,
    dry_run: bool,
) -> Result<PadReport> {
    let options = PadOptions::new(directory)
        .width(width)
        .extension(extension)
        .dry_run(dry_run);

    super::run_logged("pad", &options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PadError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_pad_operation_renames_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("1.jpg"), "a").unwrap();
        fs::write(temp_dir.path().join("10.jpg"), "b").unwrap();

        let report = pad_operation(temp_dir.path(), 3, None, false).unwrap();

        assert_eq!(report.renamed(), 2);
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("001.jpg")).unwrap(),
            "a"
        );
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("010.jpg")).unwrap(),
            "b"
        );
    }

    #[test]
    fn test_pad_operation_missing_directory_keeps_typed_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = pad_operation(&temp_dir.path().join("nope"), 3, None, false).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PadError>(),
            Some(PadError::DirectoryNotFound { .. })
        ));
    }
}
