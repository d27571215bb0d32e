//! Path validation for configured directories.

use std::path::Path;

use crate::config::model::AppConfig;

use super::{ValidationIssue, ValidationResult};

/// Validates that configured paths exist and are usable.
pub fn validate(config: &AppConfig) -> ValidationResult {
    let mut result = ValidationResult::new();

    if let Some(temp_dir) = &config.join.temp_dir {
        validate_directory_writable(temp_dir, "join.temp_dir", &mut result);
    }

    result
}

/// Validates that a directory exists and is writable.
fn validate_directory_writable(path: &Path, config_path: &str, result: &mut ValidationResult) {
    if !path.exists() {
        result.add(
            ValidationIssue::error(
                config_path,
                format!("Directory does not exist: '{}'", path.display()),
            )
            .with_suggestion("Create the directory or update the path"),
        );
        return;
    }

    if !path.is_dir() {
        result.add(ValidationIssue::error(
            config_path,
            format!("Path is not a directory: '{}'", path.display()),
        ));
        return;
    }

    // Probe with a throwaway file
    match tempfile::tempfile_in(path) {
        Ok(_) => {}
        Err(e) => {
            result.add(
                ValidationIssue::error(
                    config_path,
                    format!("Directory is not writable '{}': {}", path.display(), e),
                )
                .with_suggestion("Check directory permissions"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_temp_dir_is_fine() {
        assert!(validate(&AppConfig::default()).is_valid());
    }

    #[test]
    fn existing_temp_dir_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.join.temp_dir = Some(dir.path().to_path_buf());
        assert!(validate(&config).is_valid());
    }

    #[test]
    fn missing_or_file_temp_dir_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();

        config.join.temp_dir = Some(dir.path().join("missing"));
        assert_eq!(validate(&config).errors().count(), 1);

        let file = dir.path().join("file");
        std::fs::write(&file, "x").unwrap();
        config.join.temp_dir = Some(file);
        assert_eq!(validate(&config).errors().count(), 1);
    }
}
