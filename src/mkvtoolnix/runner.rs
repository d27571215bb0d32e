//! Process execution seam.

use std::ffi::OsString;
use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::ToolError;

/// Captured result of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when killed by a signal.
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    /// Best human-readable explanation of a failure.
    ///
    /// mkvtoolnix reports most errors on stdout, so fall back to it when stderr is empty.
    pub fn message(&self) -> String {
        let stderr = String::from_utf8_lossy(&self.stderr).trim().to_string();
        if !stderr.is_empty() {
            return stderr;
        }
        String::from_utf8_lossy(&self.stdout).trim().to_string()
    }
}

/// Runs a program to completion and captures its output.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, program: &Path, args: &[OsString]) -> Result<CommandOutput, ToolError>;
}

/// Runs real processes with tokio.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &Path, args: &[OsString]) -> Result<CommandOutput, ToolError> {
        let mut cmd = Command::new(program);
        cmd.args(args);

        debug!(cmd = ?cmd, "Running external tool");

        let output = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| ToolError::SpawnFailed {
                tool: tool_name(program),
                message: e.to_string(),
            })?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

/// Short name of a program for error messages.
pub(crate) fn tool_name(program: &Path) -> String {
    program
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| program.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_name_strips_directories() {
        assert_eq!(tool_name(Path::new("/usr/bin/mkvmerge")), "mkvmerge");
        assert_eq!(tool_name(Path::new("mkvextract")), "mkvextract");
    }

    #[tokio::test]
    async fn missing_program_is_a_spawn_failure() {
        let err = ProcessRunner
            .run(Path::new("/nonexistent/mkvmerge"), &[OsString::from("-i")])
            .await
            .unwrap_err();
        match err {
            ToolError::SpawnFailed { tool, .. } => assert_eq!(tool, "mkvmerge"),
            other => panic!("unexpected error: {}", other),
        }
    }
}
