//! Configuration validation and external tool detection.

pub mod paths;
pub mod semantic;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{AppConfig, ToolsConfig};
use crate::error::ToolError;

/// Which command the configuration is checked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationScope {
    /// Only the `tools` section is used.
    Info,
    /// Every section is used.
    Join,
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationSeverity {
    /// Blocks configuration loading.
    Error,
    /// Logged but allows loading.
    Warning,
}

/// A validation issue found during configuration checking.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Severity of the issue.
    pub severity: ValidationSeverity,
    /// Path to the problematic config field (e.g., "merge.style.top_color").
    pub path: String,
    /// Description of the issue.
    pub message: String,
    /// Optional suggestion for fixing the issue.
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    /// Creates a new error-level validation issue.
    pub fn error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ValidationSeverity::Error,
            path: path.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Creates a new warning-level validation issue.
    pub fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ValidationSeverity::Warning,
            path: path.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Adds a suggestion to this validation issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Result of validating a configuration.
#[derive(Debug, Default)]
pub struct ValidationResult {
    issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Creates an empty validation result.
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    /// Adds an issue to the result.
    pub fn add(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// Extends the result with issues from another result.
    pub fn extend(&mut self, other: ValidationResult) {
        self.issues.extend(other.issues);
    }

    /// Returns true if there are no errors (warnings are allowed).
    pub fn is_valid(&self) -> bool {
        !self
            .issues
            .iter()
            .any(|i| i.severity == ValidationSeverity::Error)
    }

    /// Returns an iterator over error-level issues.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == ValidationSeverity::Error)
    }

    /// Returns an iterator over warning-level issues.
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == ValidationSeverity::Warning)
    }
}

/// Absolute locations of the mkvtoolnix binaries, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    pub mkvmerge: PathBuf,
    pub mkvextract: PathBuf,
}

impl ToolPaths {
    /// Resolves both configured tools, failing on the first one that is missing.
    pub fn detect(tools: &ToolsConfig) -> Result<Self, ToolError> {
        let mkvmerge = which_binary(&tools.mkvmerge)?;
        let mkvextract = which_binary(&tools.mkvextract)?;

        debug!(mkvmerge = %mkvmerge.display(), mkvextract = %mkvextract.display(), "Resolved mkvtoolnix");

        Ok(Self {
            mkvmerge,
            mkvextract,
        })
    }
}

/// Locates a binary. Names with a path separator are checked directly, others go through `which`.
fn which_binary(name: &str) -> Result<PathBuf, ToolError> {
    let not_found = || ToolError::ToolNotFound {
        tool: name.to_string(),
    };

    if name.contains(std::path::MAIN_SEPARATOR) || name.contains('/') {
        let path = Path::new(name);
        return if path.is_file() {
            Ok(path.to_path_buf())
        } else {
            Err(not_found())
        };
    }

    let output = std::process::Command::new("which")
        .arg(name)
        .output()
        .map_err(|_| not_found())?;

    if output.status.success() {
        let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if path.is_empty() {
            return Err(not_found());
        }
        Ok(PathBuf::from(path))
    } else {
        Err(not_found())
    }
}

/// Validates the sections of the configuration that `scope` reads.
pub fn validate_config(config: &AppConfig, scope: ValidationScope) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.extend(semantic::validate(config, scope));
    if scope == ValidationScope::Join {
        result.extend(paths::validate(config));
    }

    result
}
