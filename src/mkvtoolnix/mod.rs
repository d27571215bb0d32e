//! mkvtoolnix subprocess wrappers.
//!
//! The pipeline only talks to the narrow traits defined here, so tests can swap
//! the real binaries for fakes.

pub mod mkvextract;
pub mod mkvmerge;
pub mod runner;

use std::path::Path;

use async_trait::async_trait;

use crate::error::ToolError;

pub use runner::{CommandOutput, CommandRunner, ProcessRunner};

/// Something that can describe the tracks of a container file.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrackInfoSource: Send + Sync {
    /// Returns the raw identification text for `file`.
    async fn track_info(&self, file: &Path) -> Result<String, ToolError>;
}

/// Something that can pull a single track out of a container file.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrackExtractor: Send + Sync {
    /// Writes track `track_id` of `file` to `output`.
    async fn extract(&self, file: &Path, track_id: u32, output: &Path) -> Result<(), ToolError>;
}

/// Only exit code 0 succeeds. With `accept_warnings`, mkvtoolnix's code 1
/// ("finished with warnings") is logged and let through as well.
pub(crate) fn check_status(
    tool: &str,
    output: &CommandOutput,
    accept_warnings: bool,
) -> Result<(), ToolError> {
    match output.code {
        Some(0) => Ok(()),
        Some(1) if accept_warnings => {
            tracing::warn!(
                tool,
                stdout = %String::from_utf8_lossy(&output.stdout).trim(),
                "Tool finished with warnings"
            );
            Ok(())
        }
        code => Err(ToolError::Failed {
            tool: tool.to_string(),
            code: code.unwrap_or(-1),
            stderr: output.message(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(code: Option<i32>, stdout: &str, stderr: &str) -> CommandOutput {
        CommandOutput {
            code,
            stdout: stdout.as_bytes().to_vec(),
            stderr: stderr.as_bytes().to_vec(),
        }
    }

    #[test]
    fn only_zero_succeeds_by_default() {
        assert!(check_status("mkvmerge", &output(Some(0), "", ""), false).is_ok());

        let err = check_status("mkvmerge", &output(Some(1), "Warning: odd file", ""), false)
            .unwrap_err();
        match err {
            ToolError::Failed { tool, code, stderr } => {
                assert_eq!(tool, "mkvmerge");
                assert_eq!(code, 1);
                assert_eq!(stderr, "Warning: odd file");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn warnings_pass_when_accepted() {
        assert!(check_status("mkvmerge", &output(Some(1), "Warning: odd file", ""), true).is_ok());
        assert!(check_status("mkvmerge", &output(Some(2), "", "Error"), true).is_err());
    }

    #[test]
    fn error_code_carries_stderr() {
        let err = check_status("mkvextract", &output(Some(2), "", "Error: no such track\n"), false)
            .unwrap_err();
        match err {
            ToolError::Failed { tool, code, stderr } => {
                assert_eq!(tool, "mkvextract");
                assert_eq!(code, 2);
                assert_eq!(stderr, "Error: no such track");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn signal_termination_is_a_failure() {
        let err = check_status("mkvmerge", &output(None, "", ""), false).unwrap_err();
        assert!(matches!(err, ToolError::Failed { code: -1, .. }));
    }

    #[test]
    fn failure_without_stderr_falls_back_to_stdout() {
        let err = check_status("mkvmerge", &output(Some(2), "Error: not a Matroska file", ""), false)
            .unwrap_err();
        assert!(err.to_string().contains("not a Matroska file"));
    }
}
