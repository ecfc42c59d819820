use std::io;
use std::path::PathBuf;
use thiserror::Error;
use zip::result::ZipError;

/// Errors produced while padding a directory or an archive.
///
/// The rename variants are raised per entry, logged, and folded into the
/// report. Everything else aborts the run.
#[derive(Debug, Error)]
pub enum PadError {
    #[error("directory not found or not readable: {}", path.display())]
    DirectoryNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("rename conflict: '{to}' already exists (from '{from}')")]
    RenameConflict { from: String, to: String },

    #[error("failed to rename '{from}' to '{to}': {source}")]
    RenameIo {
        from: String,
        to: String,
        #[source]
        source: io::Error,
    },

    #[error("archive not found or not readable: {}", path.display())]
    ArchiveNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("zip error in {}: {source}", path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: ZipError,
    },

    #[error("failed to write {}: {source}", path.display())]
    ArchiveIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("output already exists: {}", path.display())]
    OutputExists { path: PathBuf },
}

impl PadError {
    /// Classify a failed rename call by its I/O error kind.
    pub fn from_rename(from: &str, to: &str, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::AlreadyExists {
            Self::RenameConflict {
                from: from.to_string(),
                to: to.to_string(),
            }
        } else {
            Self::RenameIo {
                from: from.to_string(),
                to: to.to_string(),
                source,
            }
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::RenameConflict { .. })
    }

    /// The input of the run could not be opened at all.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::DirectoryNotFound { .. } | Self::ArchiveNotFound { .. }
        )
    }
}
