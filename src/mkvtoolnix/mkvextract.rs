//! mkvextract track extraction.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use super::runner::tool_name;
use super::{check_status, CommandRunner, TrackExtractor};
use crate::error::ToolError;

/// Extracts tracks with `mkvextract tracks <file> <id>:<output>`.
pub struct Mkvextract<R> {
    program: PathBuf,
    runner: R,
    accept_warnings: bool,
}

impl<R: CommandRunner> Mkvextract<R> {
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

/// Builds the `<id>:<output>` track specification.
fn track_spec(track_id: u32, output: &Path) -> OsString {
    let mut spec = OsString::from(format!("{}:", track_id));
    spec.push(output.as_os_str());
    spec
}

#[async_trait]
impl<R: CommandRunner> TrackExtractor for Mkvextract<R> {
    async fn extract(&self, file: &Path, track_id: u32, output: &Path) -> Result<(), ToolError> {
        let args = [
            OsString::from("tracks"),
            file.as_os_str().to_os_string(),
            track_spec(track_id, output),
        ];

        let result = self.runner.run(&self.program, &args).await?;
        check_status(&tool_name(&self.program), &result, self.accept_warnings)?;

        info!(track_id, output = %output.display(), "Extracted subtitle track");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mkvtoolnix::runner::MockCommandRunner;
    use crate::mkvtoolnix::CommandOutput;

    #[test]
    fn spec_joins_id_and_path() {
        assert_eq!(
            track_spec(5, Path::new("/tmp/top.srt")),
            OsString::from("5:/tmp/top.srt")
        );
    }

    #[tokio::test]
    async fn passes_tracks_arguments() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|program, args| {
                program == Path::new("mkvextract")
                    && args
                        == [
                            OsString::from("tracks"),
                            OsString::from("movie.mkv"),
                            OsString::from("3:/tmp/bottom.srt"),
                        ]
            })
            .times(1)
            .returning(|_, _| Ok(CommandOutput { code: Some(0), ..Default::default() }));

        let extractor = Mkvextract::new("mkvextract", runner);
        extractor
            .extract(Path::new("movie.mkv"), 3, Path::new("/tmp/bottom.srt"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn failure_is_reported() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().returning(|_, _| {
            Ok(CommandOutput {
                code: Some(2),
                stdout: Vec::new(),
                stderr: b"Error: invalid track ID 9".to_vec(),
            })
        });

        let extractor = Mkvextract::new("/usr/bin/mkvextract", runner);
        let err = extractor
            .extract(Path::new("movie.mkv"), 9, Path::new("/tmp/top.srt"))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "mkvextract failed with exit code 2: Error: invalid track ID 9"
        );
    }

    #[tokio::test]
    async fn warning_exit_fails_unless_accepted() {
        let warning = |_: &Path, _: &[OsString]| -> Result<CommandOutput, ToolError> {
            Ok(CommandOutput {
                code: Some(1),
                stdout: b"Warning: track 3 is empty".to_vec(),
                stderr: Vec::new(),
            })
        };

        let mut runner = MockCommandRunner::new();
        runner.expect_run().returning(warning);
        let extractor = Mkvextract::new("mkvextract", runner);
        let err = extractor
            .extract(Path::new("movie.mkv"), 3, Path::new("/tmp/top.srt"))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Failed { code: 1, .. }));

        let mut runner = MockCommandRunner::new();
        runner.expect_run().returning(warning);
        let extractor = Mkvextract::new("mkvextract", runner).accept_warnings(true);
        extractor
            .extract(Path::new("movie.mkv"), 3, Path::new("/tmp/top.srt"))
            .await
            .unwrap();
    }
}
