//! mkvmerge track identification.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::runner::tool_name;
use super::{check_status, CommandRunner, TrackInfoSource};
use crate::error::ToolError;

/// Identifies tracks with `mkvmerge -i <file>`.
pub struct Mkvmerge<R> {
    program: PathBuf,
    runner: R,
    accept_warnings: bool,
}

impl<R: CommandRunner> Mkvmerge<R> {
    pub fn new(program: impl Into<PathBuf>, runner: R) -> Self {
        Self {
            program: program.into(),
            runner,
            accept_warnings: false,
        }
    }

    /// Treats exit code 1 (warnings) as success.
    pub fn accept_warnings(mut self, accept: bool) -> Self {
        self.accept_warnings = accept;
        self
    }
}

#[async_trait]
impl<R: CommandRunner> TrackInfoSource for Mkvmerge<R> {
    async fn track_info(&self, file: &Path) -> Result<String, ToolError> {
        let tool = tool_name(&self.program);
        let args = [OsString::from("-i"), file.as_os_str().to_os_string()];

        let output = self.runner.run(&self.program, &args).await?;
        check_status(&tool, &output, self.accept_warnings)?;

        let text =
            String::from_utf8(output.stdout).map_err(|_| ToolError::InvalidOutput { tool })?;

        debug!(file = %file.display(), lines = text.lines().count(), "Identified tracks");
        Ok(text)
    }
}
