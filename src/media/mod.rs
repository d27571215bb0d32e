//! Subtitle track analysis.

pub mod tracks;

pub use tracks::{
    parse_track_info, resolve_selection, ResolvedTracks, TrackDescriptor, TrackSelection,
};
