pub mod at;
pub mod inspect;
pub mod normalize;
pub mod replay;

use std::path::Path;

use cuetrack_engine::{load_track, LoadedTrack, ParseOptions};

/// Load a track, turning library errors into CLI-friendly messages.
pub(crate) fn load(path: &Path, options: &ParseOptions) -> anyhow::Result<LoadedTrack> {
    load_track(path, options).map_err(|e| anyhow::anyhow!("Failed to load track: {e}"))
}
