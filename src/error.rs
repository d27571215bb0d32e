//! Error types for mkvdualsub.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application errors.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error(transparent)]
    Track(#[from] TrackError),

    #[error("Merge error: {0}")]
    Merge(#[from] MergeError),

    #[error("{path} already exists")]
    OutputAlreadyExists { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration loading and parsing errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {message}")]
    ParseFailed { path: PathBuf, message: String },

    #[error("Config validation failed with {error_count} error(s)")]
    ValidationFailed { error_count: usize },
}

/// Errors raised while locating or running mkvtoolnix binaries.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("could not find {tool}")]
    ToolNotFound { tool: String },

    #[error("error calling {tool}: {message}")]
    SpawnFailed { tool: String, message: String },

    #[error("{tool} failed with exit code {code}: {stderr}")]
    Failed {
        tool: String,
        code: i32,
        stderr: String,
    },

    #[error("{tool} printed output that is not valid UTF-8")]
    InvalidOutput { tool: String },
}

/// Track discovery and selection errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TrackError {
    #[error("malformed subtitle line: {line}")]
    MalformedOutput { line: String },

    #[error("invalid number of subtitle track: ({track_id})")]
    InvalidTrackNumber { track_id: u32 },

    #[error("number of available subtitles less than 2 ({found})")]
    InsufficientTracks { found: usize },

    #[error("top and bottom both select subtitle track {track_id}")]
    IdenticalTracks { track_id: u32 },
}

/// Remote merge service errors.
#[derive(Error, Debug)]
pub enum MergeError {
    #[error("bad status code: {status}")]
    RemoteService { status: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to read extracted track '{path}': {source}")]
    ReadTrack {
        path: PathBuf,
        source: std::io::Error,
    },
}
