//! Configuration loading, validation, and command-line overrides.

pub mod loader;
pub mod model;

use crate::cli::JoinArgs;
pub use model::{AppConfig, JoinConfig, MergeConfig, SubtitleStyle, ToolsConfig};

impl AppConfig {
    /// Applies `join` command-line options on top of the file settings.
    pub fn with_join_overrides(mut self, args: &JoinArgs) -> Self {
        let style = &mut self.merge.style;

        if let Some(name) = &args.font_name {
            style.fontname = name.clone();
        }
        if let Some(size) = args.font_size {
            style.fontsize = size;
        }
        if let Some(color) = &args.top_color {
            style.top_color = color.clone();
        }
        if let Some(color) = &args.bottom_color {
            style.bot_color = color.clone();
        }
        if args.reject_identical {
            self.join.reject_identical_tracks = true;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_given_values() {
        let args = JoinArgs {
            font_size: Some(24),
            bottom_color: Some("#00FF00".to_string()),
            ..Default::default()
        };

        let config = AppConfig::default().with_join_overrides(&args);
        assert_eq!(config.merge.style.fontsize, 24);
        assert_eq!(config.merge.style.bot_color, "#00FF00");
        assert_eq!(config.merge.style.fontname, "Arial");
        assert_eq!(config.merge.style.top_color, "#FFFFF9");
        assert!(!config.join.reject_identical_tracks);
    }

    #[test]
    fn reject_flag_cannot_be_cleared_from_cli() {
        let mut base = AppConfig::default();
        base.join.reject_identical_tracks = true;

        let config = base.with_join_overrides(&JoinArgs::default());
        assert!(config.join.reject_identical_tracks);
    }
}
