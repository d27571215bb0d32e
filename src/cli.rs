//! Command-line interface definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Merge two subtitle tracks of a Matroska file into one dual-language track.
#[derive(Parser, Debug)]
#[command(name = "mkvdualsub", version, about, long_about = None)]
pub struct Cli {
    /// Path to an optional YAML configuration file.
    #[arg(short, long, env = "MKVDUALSUB_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Returns the log level based on verbosity flags.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Information about file subtitles.
    Info {
        /// The Matroska file to inspect.
        file: PathBuf,
    },

    /// Join two subtitle tracks into `<file>.ass`.
    Join(JoinArgs),
}

/// Arguments for the join subcommand.
#[derive(Args, Debug, Default)]
pub struct JoinArgs {
    /// The Matroska file to read subtitles from.
    pub file: PathBuf,

    /// Top subtitle track number.
    #[arg(short, long)]
    pub top: Option<u32>,

    /// Bottom subtitle track number.
    #[arg(short, long)]
    pub bottom: Option<u32>,

    /// Font used for both subtitle lines.
    #[arg(long)]
    pub font_name: Option<String>,

    /// Font size used for both subtitle lines.
    #[arg(long)]
    pub font_size: Option<u32>,

    /// Color of the top subtitle line (#RRGGBB).
    #[arg(long)]
    pub top_color: Option<String>,

    /// Color of the bottom subtitle line (#RRGGBB).
    #[arg(long)]
    pub bottom_color: Option<String>,

    /// Refuse to join a track with itself.
    #[arg(long)]
    pub reject_identical: bool,
}
