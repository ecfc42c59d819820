//! Zero-padding entry names inside a zip archive.
//!
//! Only the last path component of a file entry is padded, so
//! `scans/7_page.png` becomes `scans/007_page.png`. Directory entries and
//! entry contents are copied as they are. The result always goes to a new
//! archive. An existing file at the output path is never replaced.

use crate::error::PadError;
use crate::pattern::{matches_extension, pad_name, PaddedName};
use crate::renamer::{conflict, Outcome, PadReport, SkipReason, DEFAULT_WIDTH};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use zip::result::ZipError;
use zip::write::FileOptions;
use zip::{ZipArchive, ZipWriter};

/// File name used for the padded archive unless the input's name is kept.
pub fn default_archive_name(width: usize) -> String {
    format!("renamed_images_pad{width}.zip")
}

/// Parameters for padding one archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: usize,
    pub extension: Option<String>,
    pub dry_run: bool,
}

impl ArchiveOptions {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            width: DEFAULT_WIDTH,
            extension: None,
            dry_run: false,
        }
    }

    /// Where the padded archive goes: `out_dir` (or the input's folder),
    /// named after the input when `keep_name` is set.
    pub fn output_path(
        input: &Path,
        out_dir: Option<&Path>,
        width: usize,
        keep_name: bool,
    ) -> PathBuf {
        let dir = out_dir
            .or_else(|| input.parent())
            .unwrap_or_else(|| Path::new(""));
        match input.file_name() {
            Some(name) if keep_name => dir.join(name),
            _ => dir.join(default_archive_name(width)),
        }
    }

    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn extension(mut self, extension: Option<impl Into<String>>) -> Self {
        self.extension = extension.map(Into::into).filter(|e| !e.is_empty());
        self
    }

    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Result of padding an archive. Entry names in the report are full paths
/// inside the archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveReport {
    pub output: PathBuf,
    /// False for dry runs
    pub written: bool,
    pub report: PadReport,
}

/// Pad every numerically prefixed file entry of `options.input` and write
/// the result to `options.output`.
pub fn pad_archive(options: &ArchiveOptions) -> Result<ArchiveReport, PadError> {
    let input = options.input.as_path();
    let output = options.output.as_path();
    let file = File::open(input).map_err(|source| PadError::ArchiveNotFound {
        path: input.to_path_buf(),
        source,
    })?;
    let mut archive = ZipArchive::new(file).map_err(zip_error(input))?;

    if !options.dry_run && output.symlink_metadata().is_ok() {
        return Err(PadError::OutputExists {
            path: output.to_path_buf(),
        });
    }

    let mut names = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let entry = archive.by_index(index).map_err(zip_error(input))?;
        names.push(entry.name().to_string());
    }
    tracing::debug!(archive = %input.display(), entries = names.len(), "read archive index");

    let mut taken: HashSet<String> = names.iter().cloned().collect();
    let mut writer = if options.dry_run {
        None
    } else {
        let dir = match output.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let temp = NamedTempFile::new_in(dir).map_err(|source| PadError::ArchiveIo {
            path: output.to_path_buf(),
            source,
        })?;
        Some(ZipWriter::new(temp))
    };

    let mut outcomes = Vec::with_capacity(names.len());
    for (index, name) in names.iter().enumerate() {
        let mut entry = archive.by_index(index).map_err(zip_error(input))?;
        let outcome = classify_entry(name, entry.is_dir(), options, &mut taken);

        if let Some(writer) = writer.as_mut() {
            let target = match &outcome {
                Outcome::Renamed { to, .. } => to.as_str(),
                _ => name.as_str(),
            };
            let mut entry_options = FileOptions::default()
                .last_modified_time(entry.last_modified())
                .large_file(entry.size() >= u64::from(u32::MAX));
            if let Some(mode) = entry.unix_mode() {
                entry_options = entry_options.unix_permissions(mode);
            }

            if entry.is_dir() {
                writer
                    .add_directory(target, entry_options)
                    .map_err(zip_error(output))?;
            } else {
                writer
                    .start_file(target, entry_options)
                    .map_err(zip_error(output))?;
                io::copy(&mut entry, writer).map_err(|source| PadError::ArchiveIo {
                    path: output.to_path_buf(),
                    source,
                })?;
            }
        }

        outcomes.push(outcome);
    }

    if let Some(mut writer) = writer {
        let temp = writer.finish().map_err(zip_error(output))?;
        temp.persist_noclobber(output).map_err(|e| PadError::ArchiveIo {
            path: output.to_path_buf(),
            source: e.error,
        })?;
        tracing::info!(output = %output.display(), "wrote padded archive");
    }

    Ok(ArchiveReport {
        output: output.to_path_buf(),
        written: !options.dry_run,
        report: PadReport {
            directory: input.to_path_buf(),
            width: options.width,
            extension: options.extension.clone(),
            dry_run: options.dry_run,
            outcomes,
        },
    })
}

fn zip_error(path: &Path) -> impl FnOnce(ZipError) -> PadError {
    let path = path.to_path_buf();
    move |source| PadError::Archive { path, source }
}

fn classify_entry(
    name: &str,
    is_dir: bool,
    options: &ArchiveOptions,
    taken: &mut HashSet<String>,
) -> Outcome {
    let skip = |reason: SkipReason| {
        tracing::debug!(name, reason = reason.as_str(), "skipping archive entry");
        Outcome::Skipped {
            name: name.to_string(),
            reason,
        }
    };

    if is_dir {
        return skip(SkipReason::Directory);
    }

    let (folder, base) = match name.rsplit_once('/') {
        Some((folder, base)) => (&name[..=folder.len()], base),
        None => ("", name),
    };

    if let Some(extension) = &options.extension {
        if !matches_extension(base, extension) {
            return skip(SkipReason::ExtensionMismatch);
        }
    }

    let Some(padded) = pad_name(base, options.width) else {
        return skip(SkipReason::NoLeadingDigits);
    };

    if padded.is_unchanged() {
        return Outcome::Unchanged {
            name: name.to_string(),
        };
    }

    let padded = PaddedName {
        original: name.to_string(),
        padded: format!("{folder}{}", padded.padded),
        ..padded
    };
    if !taken.insert(padded.padded.clone()) {
        return conflict(padded);
    }

    if options.dry_run {
        Outcome::Planned {
            from: padded.original,
            to: padded.padded,
        }
    } else {
        tracing::info!(from = name, to = %padded.padded, "renamed archive entry");
        Outcome::Renamed {
            from: padded.original,
            to: padded.padded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renamer::FailureKind;
    use std::io::{Read, Write};
    use tempfile::TempDir;

    fn make_zip(path: &Path, entries: &[(&str, Option<&str>)]) {
        let file = File::create(path).unwrap();
        let mut zip = ZipWriter::new(file);
        let options = FileOptions::default();

        for (name, contents) in entries {
            match contents {
                Some(contents) => {
                    zip.start_file(*name, options).unwrap();
                    zip.write_all(contents.as_bytes()).unwrap();
                },
                None => zip.add_directory(*name, options).unwrap(),
            }
        }
        zip.finish().unwrap();
    }

    fn read_zip(path: &Path) -> Vec<(String, String)> {
        let mut archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
        let mut entries = Vec::new();
        for index in 0..archive.len() {
            let mut entry = archive.by_index(index).unwrap();
            let mut contents = String::new();
            entry.read_to_string(&mut contents).unwrap();
            entries.push((entry.name().to_string(), contents));
        }
        entries
    }

    #[test]
    fn test_pads_base_names_and_keeps_folders() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("scans.zip");
        make_zip(
            &input,
            &[
                ("scans/", None),
                ("scans/7_page.png", Some("seven")),
                ("scans/100.png", Some("hundred")),
                ("1.txt", Some("one")),
                ("scans/cover.png", Some("cover")),
            ],
        );
        let output = temp_dir.path().join("out.zip");

        let result = pad_archive(&ArchiveOptions::new(&input, &output)).unwrap();

        assert!(result.written);
        assert_eq!(result.report.renamed(), 2);
        assert_eq!(result.report.unchanged(), 1);
        assert_eq!(result.report.skipped(), 2);
        assert_eq!(
            read_zip(&output),
            vec![
                ("scans/".to_string(), String::new()),
                ("scans/007_page.png".to_string(), "seven".to_string()),
                ("scans/100.png".to_string(), "hundred".to_string()),
                ("001.txt".to_string(), "one".to_string()),
                ("scans/cover.png".to_string(), "cover".to_string()),
            ]
        );
        // Input is left alone
        assert_eq!(read_zip(&input)[1].0, "scans/7_page.png");
    }

    #[test]
    fn test_digits_in_folder_names_are_not_padded() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.zip");
        make_zip(&input, &[("2024/5.jpg", Some(""))]);
        let output = temp_dir.path().join("out.zip");

        let result = pad_archive(&ArchiveOptions::new(&input, &output).width(2)).unwrap();

        assert_eq!(
            result.report.outcomes,
            vec![Outcome::Renamed {
                from: "2024/5.jpg".to_string(),
                to: "2024/05.jpg".to_string(),
            }]
        );
    }

    #[test]
    fn test_extension_filter_applies_to_entries() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.zip");
        make_zip(&input, &[("1.JPG", Some("")), ("2.png", Some(""))]);
        let output = temp_dir.path().join("out.zip");

        let options = ArchiveOptions::new(&input, &output).extension(Some(".jpg"));
        let result = pad_archive(&options).unwrap();

        let names: Vec<String> = read_zip(&output).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["001.JPG", "2.png"]);
        assert_eq!(
            result.report.outcomes[1],
            Outcome::Skipped {
                name: "2.png".to_string(),
                reason: SkipReason::ExtensionMismatch,
            }
        );
    }

    #[test]
    fn test_conflicting_entry_keeps_its_name() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.zip");
        make_zip(
            &input,
            &[("a/1.jpg", Some("short")), ("a/001.jpg", Some("padded"))],
        );
        let output = temp_dir.path().join("out.zip");

        let result = pad_archive(&ArchiveOptions::new(&input, &output)).unwrap();

        assert_eq!(result.report.renamed(), 0);
        assert!(matches!(
            &result.report.outcomes[0],
            Outcome::Failed { from, to, kind: FailureKind::Conflict, .. }
                if from == "a/1.jpg" && to == "a/001.jpg"
        ));
        assert_eq!(
            read_zip(&output),
            vec![
                ("a/1.jpg".to_string(), "short".to_string()),
                ("a/001.jpg".to_string(), "padded".to_string()),
            ]
        );
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.zip");
        make_zip(&input, &[("3.png", Some(""))]);
        let output = temp_dir.path().join("out.zip");

        let result = pad_archive(&ArchiveOptions::new(&input, &output).dry_run(true)).unwrap();

        assert!(!result.written);
        assert_eq!(result.report.planned(), 1);
        assert!(!output.exists());
    }

    #[test]
    fn test_existing_output_is_not_replaced() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.zip");
        make_zip(&input, &[("3.png", Some(""))]);

        let err = pad_archive(&ArchiveOptions::new(&input, &input)).unwrap_err();

        assert!(matches!(err, PadError::OutputExists { .. }));
        assert_eq!(read_zip(&input)[0].0, "3.png");
    }

    #[test]
    fn test_missing_archive() {
        let temp_dir = TempDir::new().unwrap();
        let err = pad_archive(&ArchiveOptions::new(
            temp_dir.path().join("nope.zip"),
            temp_dir.path().join("out.zip"),
        ))
        .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_not_a_zip() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("fake.zip");
        std::fs::write(&input, "plain text").unwrap();

        let err = pad_archive(&ArchiveOptions::new(&input, temp_dir.path().join("out.zip")))
            .unwrap_err();
        assert!(matches!(err, PadError::Archive { .. }));
    }

    #[test]
    fn test_output_path() {
        let input = Path::new("/photos/holiday.zip");
        assert_eq!(
            ArchiveOptions::output_path(input, None, 3, false),
            PathBuf::from("/photos/renamed_images_pad3.zip")
        );
        assert_eq!(
            ArchiveOptions::output_path(input, Some(Path::new("/out")), 4, true),
            PathBuf::from("/out/holiday.zip")
        );
        assert_eq!(
            ArchiveOptions::output_path(Path::new("holiday.zip"), None, 3, false),
            PathBuf::from("renamed_images_pad3.zip")
        );
    }
}
