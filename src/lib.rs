//! mkvdualsub - merge two subtitle tracks of a Matroska file into one dual-language track.
//!
//! Subtitle tracks are listed with mkvmerge, extracted with mkvextract, and combined by
//! a remote merge service into an ASS file saved next to the input.

pub mod cli;
pub mod config;
pub mod error;
pub mod media;
pub mod merge;
pub mod mkvtoolnix;
pub mod pipeline;
pub mod validation;

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::cli::{Cli, Commands, JoinArgs};
use crate::config::AppConfig;
use crate::media::TrackSelection;
use crate::merge::HttpMergeUploader;
use crate::mkvtoolnix::mkvextract::Mkvextract;
use crate::mkvtoolnix::mkvmerge::Mkvmerge;
use crate::mkvtoolnix::ProcessRunner;
use crate::pipeline::{discover_tracks, write_track_list, JoinOptions, JoinPipeline};
use crate::validation::{ToolPaths, ValidationScope};

/// Runs mkvdualsub with the provided CLI arguments.
pub async fn run(cli: Cli) -> Result<()> {
    setup_logging(cli.log_level(), cli.log_json);

    let mut config = config::loader::load(cli.config.as_deref())?;
    let scope = match &cli.command {
        Commands::Info { .. } => ValidationScope::Info,
        Commands::Join(args) => {
            config = config.with_join_overrides(args);
            ValidationScope::Join
        }
    };
    config::loader::ensure_valid(&config, scope)?;

    let tools = ToolPaths::detect(&config.tools)?;

    match cli.command {
        Commands::Info { file } => show_info(&tools, &config, &file).await,
        Commands::Join(args) => join(&tools, config, &args).await,
    }
}

/// Initializes the tracing subscriber. Logs go to stderr so stdout stays clean.
fn setup_logging(level: &str, json: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    if json {
        builder
            .json()
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        builder.init();
    }
}

/// Prints every subtitle track description of `file`.
async fn show_info(tools: &ToolPaths, config: &AppConfig, file: &Path) -> Result<()> {
    let mkvmerge =
        Mkvmerge::new(&tools.mkvmerge, ProcessRunner).accept_warnings(config.tools.accept_warnings);
    let tracks = discover_tracks(&mkvmerge, file).await?;

    write_track_list(&tracks, &mut std::io::stdout().lock())?;
    Ok(())
}

/// Merges two subtitle tracks of the file into `<file>.ass`.
async fn join(tools: &ToolPaths, config: AppConfig, args: &JoinArgs) -> Result<()> {
    let uploader = HttpMergeUploader::new(&config.merge)?;
    let options = JoinOptions {
        style: config.merge.style,
        reject_identical_tracks: config.join.reject_identical_tracks,
        temp_dir: config.join.temp_dir,
    };

    let accept_warnings = config.tools.accept_warnings;
    let pipeline = JoinPipeline::new(
        Mkvmerge::new(&tools.mkvmerge, ProcessRunner).accept_warnings(accept_warnings),
        Mkvextract::new(&tools.mkvextract, ProcessRunner).accept_warnings(accept_warnings),
        uploader,
        options,
    );

    let selection = TrackSelection {
        top: args.top,
        bottom: args.bottom,
    };
    let output = pipeline.run(&args.file, selection).await?;

    info!(output = %output.display(), "Join complete");
    Ok(())
}
