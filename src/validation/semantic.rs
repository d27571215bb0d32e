//! Semantic validation for configuration values.

use crate::config::model::{AppConfig, MergeConfig, SubtitleStyle};

use super::{ValidationIssue, ValidationResult, ValidationScope};

/// Validates semantic correctness of configuration values. The merge settings
/// are only checked for `join`.
pub fn validate(config: &AppConfig, scope: ValidationScope) -> ValidationResult {
    let mut result = ValidationResult::new();

    validate_tools(config, &mut result);
    if scope == ValidationScope::Join {
        validate_merge(&config.merge, &mut result);
        validate_style(&config.merge.style, &mut result);
    }

    result
}

fn validate_tools(config: &AppConfig, result: &mut ValidationResult) {
    for (path, value) in [
        ("tools.mkvmerge", &config.tools.mkvmerge),
        ("tools.mkvextract", &config.tools.mkvextract),
    ] {
        if value.trim().is_empty() {
            result.add(ValidationIssue::error(path, "Tool name cannot be empty"));
        }
    }
}

fn validate_merge(merge: &MergeConfig, result: &mut ValidationResult) {
    if merge.endpoint.starts_with("http://") {
        result.add(
            ValidationIssue::warning(
                "merge.endpoint",
                format!("Subtitles will be sent unencrypted to '{}'", merge.endpoint),
            )
            .with_suggestion("Use an https:// endpoint"),
        );
    } else if !merge.endpoint.starts_with("https://") {
        result.add(ValidationIssue::error(
            "merge.endpoint",
            format!("Endpoint '{}' is not an http(s) URL", merge.endpoint),
        ));
    }

    if merge.timeout_seconds == 0 {
        result.add(ValidationIssue::error(
            "merge.timeout_seconds",
            "Timeout must be at least 1 second",
        ));
    }
}

fn validate_style(style: &SubtitleStyle, result: &mut ValidationResult) {
    if style.fontname.trim().is_empty() {
        result.add(ValidationIssue::error(
            "merge.style.fontname",
            "Font name cannot be empty",
        ));
    }

    if style.fontsize == 0 {
        result.add(ValidationIssue::error(
            "merge.style.fontsize",
            "Font size must be at least 1",
        ));
    }

    for (path, color) in [
        ("merge.style.top_color", &style.top_color),
        ("merge.style.bot_color", &style.bot_color),
    ] {
        if !is_hex_color(color) {
            result.add(
                ValidationIssue::error(path, format!("Invalid color '{}'", color))
                    .with_suggestion("Colors are written as #RRGGBB, e.g. #FFFFF9"),
            );
        }
    }
}

/// Returns true for `#RRGGBB`.
fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors() {
        assert!(is_hex_color("#FFFFF9"));
        assert!(is_hex_color("#a0b1c2"));
        assert!(!is_hex_color("FFFFF9"));
        assert!(!is_hex_color("#FFF"));
        assert!(!is_hex_color("#GGGGGG"));
    }

    #[test]
    fn zero_timeout_and_font_size_are_errors() {
        let mut config = AppConfig::default();
        config.merge.timeout_seconds = 0;
        config.merge.style.fontsize = 0;

        let result = validate(&config, ValidationScope::Join);
        let paths: Vec<_> = result.errors().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["merge.timeout_seconds", "merge.style.fontsize"]);
    }

    #[test]
    fn plain_http_endpoint_is_a_warning() {
        let mut config = AppConfig::default();
        config.merge.endpoint = "http://localhost:8080/".to_string();

        let result = validate(&config, ValidationScope::Join);
        assert!(result.is_valid());
        assert_eq!(result.warnings().count(), 1);
    }

    #[test]
    fn non_http_endpoint_is_an_error() {
        let mut config = AppConfig::default();
        config.merge.endpoint = "ftp://example.org/".to_string();
        assert_eq!(validate(&config, ValidationScope::Join).errors().count(), 1);
    }

    #[test]
    fn empty_tool_name_is_an_error() {
        let mut config = AppConfig::default();
        config.tools.mkvextract = " ".to_string();
        let result = validate(&config, ValidationScope::Join);
        assert_eq!(result.errors().next().unwrap().path, "tools.mkvextract");
    }
}
