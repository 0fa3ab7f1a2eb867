//! Load a subtitle file into a ready-to-query track.

use std::path::{Path, PathBuf};

use cuetrack_common::error::{CuetrackError, CuetrackResult};

use crate::index::CueIndex;
use crate::parser::{CueParser, ParseOptions, ParseReport, SkippedBlock};

/// A parsed subtitle file.
#[derive(Debug, Clone)]
pub struct LoadedTrack {
    pub path: PathBuf,
    pub index: CueIndex,
    pub skipped: Vec<SkippedBlock>,
    pub stray_lines: usize,
}

/// Read, decode, parse, and index an SRT file.
///
/// The file must be UTF-8 (a leading byte-order mark is fine).
pub fn load_track(path: impl AsRef<Path>, options: &ParseOptions) -> CuetrackResult<LoadedTrack> {
    let path = path.as_ref().to_path_buf();

    let bytes = std::fs::read(&path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CuetrackError::FileNotFound { path: path.clone() },
        _ => CuetrackError::Io(e),
    })?;
    let text = String::from_utf8(bytes).map_err(|e| {
        CuetrackError::encoding(
            &path,
            format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
        )
    })?;

    let ParseReport {
        cues,
        skipped,
        stray_lines,
    } = CueParser::new(options.clone())
        .parse_with_report(&text)
        .map_err(|e| CuetrackError::track(format!("{}: {e}", path.display())))?;

    if !skipped.is_empty() {
        tracing::warn!(
            "Dropped {} malformed block(s) from {:?}",
            skipped.len(),
            path
        );
    }

    Ok(LoadedTrack {
        index: CueIndex::new(cues),
        path,
        skipped,
        stray_lines,
    })
}
