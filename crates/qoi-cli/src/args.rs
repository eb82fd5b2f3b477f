//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Encode images to the Quite OK Image format (RGB, no alpha)
#[derive(Debug, Parser)]
#[command(name = "qoienc", version, about)]
pub struct Args {
    /// Images to encode (any format the image crate can read)
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Directory for the .qoi files, created if missing
    #[arg(short, long, default_value = "output", value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Don't show the progress meter
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print opcode statistics for each file as JSON on stdout
    #[arg(long)]
    pub stats: bool,
}

impl Args {
    /// Default log filter for the chosen verbosity; `RUST_LOG` still wins.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
