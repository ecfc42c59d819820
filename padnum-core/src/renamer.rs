use crate::dir_fs::{DirectoryFs, LocalFs};
use crate::error::PadError;
use crate::pattern::{matches_extension, pad_name, PaddedName};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Default width of the numeric prefix.
pub const DEFAULT_WIDTH: usize = 3;

/// Parameters for a single padding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PadOptions {
    /// Directory whose direct children are renamed
    pub directory: PathBuf,
    /// Minimum digit count of the numeric prefix; 0 disables padding
    pub width: usize,
    /// Only consider names ending with this suffix (case-insensitive)
    pub extension: Option<String>,
    /// Classify entries without renaming anything
    pub dry_run: bool,
}

impl PadOptions {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            width: DEFAULT_WIDTH,
            extension: None,
            dry_run: false,
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    Directory,
    ExtensionMismatch,
    NoLeadingDigits,
    NonUtf8Name,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Directory => "directory",
            Self::ExtensionMismatch => "extension mismatch",
            Self::NoLeadingDigits => "no leading digits",
            Self::NonUtf8Name => "name is not valid UTF-8",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Conflict,
    Io,
}

/// What happened to one directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Renamed {
        from: String,
        to: String,
    },
    Planned {
        from: String,
        to: String,
    },
    Unchanged {
        name: String,
    },
    Skipped {
        name: String,
        reason: SkipReason,
    },
    Failed {
        from: String,
        to: String,
        kind: FailureKind,
        message: String,
    },
}

impl Outcome {
    /// The entry's name before the run.
    pub fn original_name(&self) -> &str {
        match self {
            Self::Renamed { from, .. } | Self::Planned { from, .. } | Self::Failed { from, .. } => {
                from
            },
            Self::Unchanged { name } | Self::Skipped { name, .. } => name,
        }
    }

    /// The name the entry has (or would have) after the run.
    pub fn final_name(&self) -> &str {
        match self {
            Self::Renamed { to, .. } | Self::Planned { to, .. } => to,
            Self::Failed { from, .. } => from,
            Self::Unchanged { name } | Self::Skipped { name, .. } => name,
        }
    }
}

/// Everything a run did, in processing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PadReport {
    pub directory: PathBuf,
    pub width: usize,
    pub extension: Option<String>,
    pub dry_run: bool,
    pub outcomes: Vec<Outcome>,
}

impl PadReport {
    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(*o)).count()
    }

    pub fn renamed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Renamed { .. }))
    }

    pub fn planned(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Planned { .. }))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Unchanged { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed { .. }))
    }

    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, Outcome::Failed { .. }))
    }
}

/// Applies the zero-padding transformation to one directory.
pub struct Renamer<F: DirectoryFs> {
    fs: F,
}

impl Renamer<LocalFs> {
    pub fn local() -> Self {
        Self::new(LocalFs)
    }
}

impl<F: DirectoryFs> Renamer<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Run once over `options.directory`.
    ///
    /// Fails only when the directory cannot be listed. Per-entry rename
    /// failures are logged and recorded as [`Outcome::Failed`].
    pub fn run(&self, options: &PadOptions) -> Result<PadReport, PadError> {
        let dir = options.directory.as_path();
        let names = self
            .fs
            .list_entries(dir)
            .map_err(|source| PadError::DirectoryNotFound {
                path: dir.to_path_buf(),
                source,
            })?;

        tracing::debug!(
            directory = %dir.display(),
            entries = names.len(),
            width = options.width,
            "listed directory"
        );

        // Names present now plus targets claimed so far. A source that gets
        // renamed away has fewer than `width` digits, so no target equals it.
        let mut taken: HashSet<String> = names
            .iter()
            .filter_map(|name| name.to_str().map(str::to_string))
            .collect();

        let mut outcomes = Vec::with_capacity(names.len());
        for name in &names {
            let outcome = match name.to_str() {
                Some(name) => self.process_entry(dir, name, options, &mut taken),
                None => {
                    tracing::debug!(name = ?name, "skipping non UTF-8 name");
                    Outcome::Skipped {
                        name: name.to_string_lossy().into_owned(),
                        reason: SkipReason::NonUtf8Name,
                    }
                },
            };
            outcomes.push(outcome);
        }

        Ok(PadReport {
            directory: dir.to_path_buf(),
            width: options.width,
            extension: options.extension.clone(),
            dry_run: options.dry_run,
            outcomes,
        })
    }

    fn process_entry(
        &self,
        dir: &Path,
        name: &str,
        options: &PadOptions,
        taken: &mut HashSet<String>,
    ) -> Outcome {
        let skip = |reason: SkipReason| {
            tracing::debug!(name, reason = reason.as_str(), "skipping entry");
            Outcome::Skipped {
                name: name.to_string(),
                reason,
            }
        };

        let from_path = dir.join(name);
        if self.fs.is_dir(&from_path) {
            return skip(SkipReason::Directory);
        }

        if let Some(extension) = &options.extension {
            if !matches_extension(name, extension) {
                return skip(SkipReason::ExtensionMismatch);
            }
        }

        let Some(padded) = pad_name(name, options.width) else {
            return skip(SkipReason::NoLeadingDigits);
        };

        if padded.is_unchanged() {
            return Outcome::Unchanged {
                name: name.to_string(),
            };
        }

        if options.dry_run {
            if !taken.insert(padded.padded.clone()) {
                return conflict(padded);
            }
            return Outcome::Planned {
                from: padded.original,
                to: padded.padded,
            };
        }

        let to_path = dir.join(&padded.padded);
        match self.fs.rename(&from_path, &to_path) {
            Ok(()) => {
                taken.insert(padded.padded.clone());
                tracing::info!(from = name, to = %padded.padded, "renamed");
                Outcome::Renamed {
                    from: padded.original,
                    to: padded.padded,
                }
            },
            Err(source) => failed(
                PadError::from_rename(name, &padded.padded, source),
                padded,
            ),
        }
    }
}

/// Record a rename whose target is already taken, without touching anything.
pub(crate) fn conflict(padded: PaddedName) -> Outcome {
    let err = PadError::RenameConflict {
        from: padded.original.clone(),
        to: padded.padded.clone(),
    };
    failed(err, padded)
}

fn failed(err: PadError, padded: PaddedName) -> Outcome {
    tracing::warn!("{err}");
    Outcome::Failed {
        kind: if err.is_conflict() {
            FailureKind::Conflict
        } else {
            FailureKind::Io
        },
        message: err.to_string(),
        from: padded.original,
        to: padded.padded,
    }
}

/// Pad every numerically prefixed file in `directory` and return how many
/// were renamed.
pub fn pad_directory(
    directory: impl AsRef<Path>,
    width: usize,
    extension: Option<&str>,
) -> Result<usize, PadError> {
    let options = PadOptions::new(directory.as_ref())
        .width(width)
        .extension(extension);
    Renamer::local().run(&options).map(|report| report.renamed())
}
