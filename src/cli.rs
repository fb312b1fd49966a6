//! Command-line argument parsing for the shell inspector
//!
//! Supports:
//! - Interactive stdin-driven sessions
//! - Replaying a scripted command file
//! - Skipping session restore/save

use clap::Parser;
use std::path::PathBuf;

/// Interactive driver for the panel coordinator
#[derive(Parser, Debug)]
#[command(
    name = "atrium",
    version,
    about = "Inspect the LMS panel coordinator interactively"
)]
pub struct CliArgs {
    /// Script of commands to replay instead of reading stdin
    #[arg(long, value_name = "FILE")]
    pub replay: Option<PathBuf>,

    /// Start from the default layout, ignoring any saved session
    #[arg(short = 'n', long)]
    pub no_restore: bool,

    /// Do not save the session on exit
    #[arg(long)]
    pub no_save: bool,
}
