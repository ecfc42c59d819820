#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod archive;
pub mod dir_fs;
pub mod error;
pub mod operations;
pub mod output;
pub mod pattern;
pub mod preview;
pub mod renamer;

pub use archive::{default_archive_name, pad_archive, ArchiveOptions, ArchiveReport};
pub use dir_fs::{DirectoryFs, LocalFs, MemoryFs};
pub use error::PadError;
pub use operations::{archive_operation, pad_operation, plan_operation};
pub use output::{OutputFormat, OutputFormatter, VersionResult};
pub use pattern::{matches_extension, pad_digits, pad_name, split_leading_digits, PaddedName};
pub use preview::{render_preview, Preview};
pub use renamer::{
    pad_directory, FailureKind, Outcome, PadOptions, PadReport, Renamer, SkipReason,
    DEFAULT_WIDTH,
};
