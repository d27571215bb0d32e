//! Subtitle track discovery and top/bottom track selection.

use crate::error::TrackError;

/// Marker that identifies subtitle lines in `mkvmerge -i` output.
const SUBTITLE_MARKER: &str = "subtitles";

/// Prefix every track line starts with.
const TRACK_PREFIX: &str = "Track ID ";

/// A subtitle track reported by mkvmerge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackDescriptor {
    /// Track ID assigned by mkvmerge.
    pub track_id: u32,
    /// The original line, kept verbatim for display.
    pub raw_description: String,
}

/// Requested top and bottom tracks. `None` leaves the choice to the resolver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackSelection {
    pub top: Option<u32>,
    pub bottom: Option<u32>,
}

/// Concrete tracks to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTracks {
    pub top: u32,
    pub bottom: u32,
}

/// Parses mkvmerge identification output into subtitle tracks, in line order.
///
/// Lines that do not mention subtitles are skipped. A subtitle line that does not
/// look like `Track ID <n>: ...` fails the whole parse.
pub fn parse_track_info(output: &str) -> Result<Vec<TrackDescriptor>, TrackError> {
    let mut tracks = Vec::new();

    for line in output.lines() {
        if !line.contains(SUBTITLE_MARKER) {
            continue;
        }

        // Track ID 5: subtitles (SubRip/SRT)
        let malformed = || TrackError::MalformedOutput {
            line: line.to_string(),
        };
        let trimmed = line.strip_prefix(TRACK_PREFIX).ok_or_else(malformed)?;
        let colon = match trimmed.find(':') {
            Some(index) if index > 0 => index,
            _ => return Err(malformed()),
        };
        let track_id = trimmed[..colon].parse::<u32>().map_err(|_| malformed())?;

        tracks.push(TrackDescriptor {
            track_id,
            raw_description: line.to_string(),
        });
    }

    Ok(tracks)
}

/// Resolves a possibly partial selection against the discovered tracks.
///
/// The caller guarantees at least two tracks. Explicit IDs are validated; an
/// unspecified side takes the first track that differs from the other side.
/// Two explicit IDs are not checked for being distinct.
pub fn resolve_selection(
    tracks: &[TrackDescriptor],
    selection: TrackSelection,
) -> Result<ResolvedTracks, TrackError> {
    match (selection.top, selection.bottom) {
        (None, None) => {
            let (first, second) = match tracks {
                [first, second, ..] => (first, second),
                _ => {
                    return Err(TrackError::InsufficientTracks {
                        found: tracks.len(),
                    })
                }
            };
            Ok(ResolvedTracks {
                top: first.track_id,
                bottom: second.track_id,
            })
        }
        (None, Some(bottom)) => {
            ensure_valid_track(bottom, tracks)?;
            let top = first_other_than(bottom, tracks)?;
            Ok(ResolvedTracks { top, bottom })
        }
        (Some(top), None) => {
            ensure_valid_track(top, tracks)?;
            let bottom = first_other_than(top, tracks)?;
            Ok(ResolvedTracks { top, bottom })
        }
        (Some(top), Some(bottom)) => {
            ensure_valid_track(bottom, tracks)?;
            ensure_valid_track(top, tracks)?;
            Ok(ResolvedTracks { top, bottom })
        }
    }
}

/// Fails unless `track_id` is one of the discovered tracks.
pub fn ensure_valid_track(track_id: u32, tracks: &[TrackDescriptor]) -> Result<(), TrackError> {
    if tracks.iter().any(|t| t.track_id == track_id) {
        Ok(())
    } else {
        Err(TrackError::InvalidTrackNumber { track_id })
    }
}

fn first_other_than(track_id: u32, tracks: &[TrackDescriptor]) -> Result<u32, TrackError> {
    tracks
        .iter()
        .map(|t| t.track_id)
        .find(|&id| id != track_id)
        .ok_or(TrackError::InsufficientTracks {
            found: tracks.len(),
        })
}
