use anyhow::Result;
use clap::Parser;
use padnum_core::{OutputFormatter, PadError, VersionResult};
use std::io::{self, IsTerminal};
use std::process;
use tracing_subscriber::EnvFilter;

mod archive;
mod cli;
mod pad;
mod plan;

use cli::{Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let use_color = !cli.no_color && io::stdout().is_terminal();

    let result = match cli.command {
        Commands::Pad {
            target,
            dry_run,
            output,
            quiet,
        } => pad::handle_pad(&target, dry_run, output, quiet, use_color),

        Commands::Plan {
            target,
            preview,
            output,
        } => plan::handle_plan(&target, preview, output, use_color),

        Commands::Zip {
            archive: input,
            padding,
            out_dir,
            keep_name,
            dry_run,
            output,
            quiet,
        } => archive::handle_zip(
            &input,
            &padding,
            archive::ZipFlags {
                out_dir: out_dir.as_deref(),
                keep_name,
                dry_run,
                quiet,
            },
            output,
            use_color,
        ),

        Commands::Version { output } => handle_version(output),
    };

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(exit_code(&e));
        },
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the verbosity flag.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "error",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<PadError>() {
        Some(e) if e.is_not_found() => 2,
        _ => 1,
    }
}

fn handle_version(output: OutputFormat) -> Result<()> {
    let version_result = VersionResult {
        name: "padnum".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    println!("{}", version_result.format(output.into()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_for_missing_directory() {
        let err = anyhow::Error::from(PadError::DirectoryNotFound {
            path: PathBuf::from("missing"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        });
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn test_exit_code_for_missing_archive() {
        let err = anyhow::Error::from(PadError::ArchiveNotFound {
            path: PathBuf::from("missing.zip"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        });
        assert_eq!(exit_code(&err), 2);

        let err = anyhow::Error::from(PadError::OutputExists {
            path: PathBuf::from("out.zip"),
        });
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn test_exit_code_for_other_errors() {
        assert_eq!(exit_code(&anyhow::anyhow!("boom")), 1);
    }
}
