//! Configuration data structures.

use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration structure containing all settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    /// External mkvtoolnix programs.
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Remote merge service settings.
    #[serde(default)]
    pub merge: MergeConfig,

    /// Join command behaviour.
    #[serde(default)]
    pub join: JoinConfig,
}

/// Names or paths of the mkvtoolnix binaries.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToolsConfig {
    /// Program used to identify tracks.
    #[serde(default = "default_mkvmerge")]
    pub mkvmerge: String,

    /// Program used to extract tracks.
    #[serde(default = "default_mkvextract")]
    pub mkvextract: String,

    /// Treat mkvtoolnix exit code 1 ("finished with warnings") as success.
    #[serde(default)]
    pub accept_warnings: bool,
}

/// Remote merge service configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MergeConfig {
    /// URL the subtitle form is posted to.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Styling sent along with the subtitles.
    #[serde(default)]
    pub style: SubtitleStyle,
}

/// Styling of the merged subtitle track.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubtitleStyle {
    #[serde(default = "default_fontname")]
    pub fontname: String,

    #[serde(default = "default_fontsize")]
    pub fontsize: u32,

    /// Top line color as `#RRGGBB`.
    #[serde(default = "default_top_color")]
    pub top_color: String,

    /// Bottom line color as `#RRGGBB`.
    #[serde(default = "default_bot_color")]
    pub bot_color: String,
}

/// Join command configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JoinConfig {
    /// Fail when top and bottom name the same track.
    #[serde(default)]
    pub reject_identical_tracks: bool,

    /// Directory for extracted tracks. Defaults to the system temp dir.
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            mkvmerge: default_mkvmerge(),
            mkvextract: default_mkvextract(),
            accept_warnings: false,
        }
    }
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout_seconds(),
            style: SubtitleStyle::default(),
        }
    }
}

impl Default for SubtitleStyle {
    fn default() -> Self {
        Self {
            fontname: default_fontname(),
            fontsize: default_fontsize(),
            top_color: default_top_color(),
            bot_color: default_bot_color(),
        }
    }
}

fn default_mkvmerge() -> String {
    "mkvmerge".to_string()
}

fn default_mkvextract() -> String {
    "mkvextract".to_string()
}

fn default_endpoint() -> String {
    "https://pas-bien.net/2srt2ass/".to_string()
}

fn default_timeout_seconds() -> u64 {
    5
}

fn default_fontname() -> String {
    "Arial".to_string()
}

fn default_fontsize() -> u32 {
    16
}

fn default_top_color() -> String {
    "#FFFFF9".to_string()
}

fn default_bot_color() -> String {
    "#F9FFF9".to_string()
}
