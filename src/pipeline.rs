//! Subtitle discovery and the join pipeline.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::config::model::SubtitleStyle;
use crate::error::{AppError, TrackError};
use crate::media::{parse_track_info, resolve_selection, TrackDescriptor, TrackSelection};
use crate::merge::{MergeRequest, MergeUploader};
use crate::mkvtoolnix::{TrackExtractor, TrackInfoSource};

/// Lists the subtitle tracks of `file` in the order mkvmerge reports them.
pub async fn discover_tracks<S>(source: &S, file: &Path) -> Result<Vec<TrackDescriptor>, AppError>
where
    S: TrackInfoSource + ?Sized,
{
    let text = source.track_info(file).await?;
    let tracks = parse_track_info(&text)?;

    debug!(file = %file.display(), count = tracks.len(), "Discovered subtitle tracks");
    Ok(tracks)
}

/// Writes one raw description line per track. No tracks, no output.
pub fn write_track_list<W: std::io::Write>(
    tracks: &[TrackDescriptor],
    out: &mut W,
) -> std::io::Result<()> {
    for track in tracks {
        writeln!(out, "{}", track.raw_description)?;
    }
    out.flush()
}

/// Where the merged track for `file` is written: the file name with `.ass` appended.
pub fn output_path(file: &Path) -> PathBuf {
    let mut name = file.as_os_str().to_os_string();
    name.push(".ass");
    PathBuf::from(name)
}

/// Settings for a join run.
#[derive(Debug, Clone, Default)]
pub struct JoinOptions {
    /// Styling sent to the merge service.
    pub style: SubtitleStyle,
    /// Fail instead of joining a track with itself.
    pub reject_identical_tracks: bool,
    /// Parent directory for extracted tracks.
    pub temp_dir: Option<PathBuf>,
}

/// Extracts two subtitle tracks, merges them remotely, and saves the result.
pub struct JoinPipeline<S, E, U> {
    source: S,
    extractor: E,
    uploader: U,
    options: JoinOptions,
}

impl<S, E, U> JoinPipeline<S, E, U>
where
    S: TrackInfoSource,
    E: TrackExtractor,
    U: MergeUploader,
{
    pub fn new(source: S, extractor: E, uploader: U, options: JoinOptions) -> Self {
        Self {
            source,
            extractor,
            uploader,
            options,
        }
    }

    /// Runs the whole join for `file` and returns the path of the written track.
    ///
    /// Nothing is extracted or uploaded unless the selection resolves and the
    /// output file does not exist yet. Extracted tracks are removed on every exit.
    pub async fn run(&self, file: &Path, selection: TrackSelection) -> Result<PathBuf, AppError> {
        let tracks = discover_tracks(&self.source, file).await?;

        if tracks.len() < 2 {
            return Err(TrackError::InsufficientTracks {
                found: tracks.len(),
            }
            .into());
        }

        let resolved = resolve_selection(&tracks, selection)?;
        if self.options.reject_identical_tracks && resolved.top == resolved.bottom {
            return Err(TrackError::IdenticalTracks {
                track_id: resolved.top,
            }
            .into());
        }

        info!(top = resolved.top, bottom = resolved.bottom, "Selected subtitle tracks");

        let output = output_path(file);
        if output.exists() {
            return Err(AppError::OutputAlreadyExists { path: output });
        }

        let scratch = self.scratch_dir()?;
        let top_file = scratch.path().join("top.srt");
        let bottom_file = scratch.path().join("bottom.srt");

        self.extractor.extract(file, resolved.top, &top_file).await?;
        self.extractor.extract(file, resolved.bottom, &bottom_file).await?;

        let request = MergeRequest {
            top: top_file,
            bottom: bottom_file,
            style: self.options.style.clone(),
        };
        let merged = self.uploader.merge(&request).await?;

        write_new_file(&output, &merged).await?;

        info!(output = %output.display(), bytes = merged.len(), "Dual subtitles written");
        Ok(output)
    }

    fn scratch_dir(&self) -> Result<tempfile::TempDir, AppError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("mkvdualsub");

        let dir = match &self.options.temp_dir {
            Some(parent) => builder.tempdir_in(parent)?,
            None => builder.tempdir()?,
        };
        Ok(dir)
    }
}

/// Writes `contents` to `path`, refusing to replace an existing file.
async fn write_new_file(path: &Path, contents: &[u8]) -> Result<(), AppError> {
    let mut file = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => AppError::OutputAlreadyExists {
                path: path.to_path_buf(),
            },
            _ => AppError::Io(e),
        })?;

    file.write_all(contents).await?;
    file.flush().await?;
    Ok(())
}
