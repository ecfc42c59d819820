use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::types::{OutputFormat, PreviewArg};

/// Zero-pad the numeric prefix of filenames in a directory
#[derive(Parser, Debug)]
#[command(name = "padnum")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Show diagnostic logs on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Directory and padding parameters shared by pad and plan
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Directory whose files are renamed (not recursive)
    pub directory: PathBuf,

    #[command(flatten)]
    pub padding: PaddingArgs,
}

/// Padding parameters shared by every renaming command
#[derive(Args, Debug, Clone)]
pub struct PaddingArgs {
    /// Digits the numeric prefix is padded to; 0 or less leaves names as they are
    #[arg(short, long, default_value_t = 3, allow_negative_numbers = true)]
    pub width: i64,

    /// Only rename files ending with this suffix, compared case-insensitively (e.g. ".jpg")
    #[arg(short, long = "ext", value_name = "EXT")]
    pub extension: Option<String>,
}

impl PaddingArgs {
    /// Width as the core understands it; non-positive widths mean no padding.
    pub fn effective_width(&self) -> usize {
        usize::try_from(self.width).unwrap_or(0)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rename numerically prefixed files so their numbers have a fixed width
    Pad {
        #[command(flatten)]
        target: TargetArgs,

        /// Show what would be renamed without renaming anything
        #[arg(long, short = 'n')]
        dry_run: bool,

        /// Output format for machine consumption
        #[arg(long, short, value_enum, default_value = "summary")]
        output: OutputFormat,

        /// Suppress the summary output
        #[arg(long, short)]
        quiet: bool,
    },

    /// Preview the renames without touching the directory
    Plan {
        #[command(flatten)]
        target: TargetArgs,

        /// Preview format
        #[arg(long, value_enum, default_value = "table")]
        preview: PreviewArg,

        /// Output format for machine consumption
        #[arg(long, short, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Write a copy of a zip archive with every file entry padded
    Zip {
        /// Zip archive to read; it is never modified
        archive: PathBuf,

        #[command(flatten)]
        padding: PaddingArgs,

        /// Folder for the padded archive [default: the archive's folder]
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Name the padded archive like the input instead of renamed_images_pad<WIDTH>.zip
        #[arg(long)]
        keep_name: bool,

        /// Show what would be renamed without writing an archive
        #[arg(long, short = 'n')]
        dry_run: bool,

        /// Output format for machine consumption
        #[arg(long, short, value_enum, default_value = "summary")]
        output: OutputFormat,

        /// Suppress the summary output
        #[arg(long, short)]
        quiet: bool,
    },

    /// Show version information
    Version {
        /// Output format for machine consumption
        #[arg(long, short, value_enum, default_value = "summary")]
        output: OutputFormat,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_pad_defaults() {
        let cli = Cli::parse_from(["padnum", "pad", "photos"]);
        match cli.command {
            Commands::Pad {
                target,
                dry_run,
                output,
                quiet,
            } => {
                assert_eq!(target.directory, PathBuf::from("photos"));
                assert_eq!(target.padding.width, 3);
                assert_eq!(target.padding.extension, None);
                assert!(!dry_run);
                assert!(!quiet);
                assert_eq!(output, OutputFormat::Summary);
            },
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_negative_width_is_accepted() {
        let cli = Cli::parse_from(["padnum", "pad", "photos", "--width", "-2"]);
        let Commands::Pad { target, .. } = cli.command else {
            panic!("expected pad");
        };
        assert_eq!(target.padding.width, -2);
        assert_eq!(target.padding.effective_width(), 0);
    }

    #[test]
    fn test_plan_arguments() {
        let cli = Cli::parse_from([
            "padnum", "-vv", "plan", "scans", "-w", "5", "--ext", ".PNG", "--preview", "summary",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Plan {
            target, preview, ..
        } = cli.command
        else {
            panic!("expected plan");
        };
        assert_eq!(target.padding.effective_width(), 5);
        assert_eq!(target.padding.extension.as_deref(), Some(".PNG"));
        assert_eq!(preview, PreviewArg::Summary);
    }

    #[test]
    fn test_zip_arguments() {
        let cli = Cli::parse_from([
            "padnum", "zip", "photos.zip", "-w", "4", "--out-dir", "out", "--keep-name",
        ]);
        let Commands::Zip {
            archive,
            padding,
            out_dir,
            keep_name,
            dry_run,
            ..
        } = cli.command
        else {
            panic!("expected zip");
        };
        assert_eq!(archive, PathBuf::from("photos.zip"));
        assert_eq!(padding.effective_width(), 4);
        assert_eq!(out_dir, Some(PathBuf::from("out")));
        assert!(keep_name);
        assert!(!dry_run);
    }
}
