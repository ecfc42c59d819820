pub mod args;
pub mod types;

pub use args::{Cli, Commands, PaddingArgs, TargetArgs};
pub use types::{OutputFormat, PreviewArg};
