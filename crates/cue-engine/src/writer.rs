//! Canonical SRT output.

use cuetrack_common::error::CuetrackResult;
use cuetrack_model::{seconds_to_human, Cue};

/// Render cues as SRT.
///
/// Blocks are renumbered from 1, timestamps use the comma separator, and
/// `line_break` markers inside cue text become real newlines again.
pub fn generate_srt<'a>(cues: impl IntoIterator<Item = &'a Cue>, line_break: &str) -> String {
    let mut output = String::new();

    for (i, cue) in cues.into_iter().enumerate() {
        output.push_str(&format!("{}\n", i + 1));
        output.push_str(&format!(
            "{} --> {}\n",
            seconds_to_human(cue.start_seconds()),
            seconds_to_human(cue.end_seconds()),
        ));
        for line in cue.lines(line_break) {
            output.push_str(line);
            output.push('\n');
        }
        output.push('\n');
    }

    output
}

/// Write cues to an SRT file.
pub fn save_srt<'a>(
    cues: impl IntoIterator<Item = &'a Cue>,
    line_break: &str,
    path: &std::path::Path,
) -> CuetrackResult<()> {
    std::fs::write(path, generate_srt(cues, line_break))?;
    Ok(())
}
