//! Configuration file loading and parsing.

use std::path::Path;

use anyhow::{Context, Result};

use super::model::AppConfig;
use crate::error::ConfigError;
use crate::validation::{validate_config, ValidationIssue, ValidationScope};

/// Loads the configuration file from disk and parses it.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parses YAML configuration text. An empty document yields the defaults.
pub fn parse(content: &str, path: &Path) -> Result<AppConfig, ConfigError> {
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| ConfigError::ParseFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Loads the configuration file if one was given, otherwise the defaults.
pub fn load(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => load_from_path(path).context("Failed to load configuration"),
        None => Ok(AppConfig::default()),
    }
}

/// Validates the sections `scope` needs, logging warnings and rejecting the
/// configuration on any error.
pub fn ensure_valid(config: &AppConfig, scope: ValidationScope) -> Result<(), ConfigError> {
    let result = validate_config(config, scope);

    for issue in result.warnings() {
        tracing::warn!(
            path = %issue.path,
            message = %issue.message,
            suggestion = ?issue.suggestion,
            "Config validation warning"
        );
    }

    if !result.is_valid() {
        let errors: Vec<_> = result.errors().collect();
        let report = format_validation_errors(&errors);
        tracing::error!("{}", report);
        return Err(ConfigError::ValidationFailed {
            error_count: errors.len(),
        });
    }

    Ok(())
}

/// Formats validation errors into a human-readable report.
fn format_validation_errors(errors: &[&ValidationIssue]) -> String {
    let mut report = String::from("\nConfig Validation Failed\n");
    report.push_str("========================\n\n");

    for error in errors {
        report.push_str(&format!("ERROR {}\n", error.path));
        report.push_str(&format!("  └─ {}\n", error.message));
        if let Some(suggestion) = &error.suggestion {
            report.push_str(&format!("     {}\n", suggestion));
        }
        report.push('\n');
    }

    report.push_str(&format!("---\n{} error(s)\n", errors.len()));

    report
}
