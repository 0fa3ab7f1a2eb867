//! Rewrite a track as clean SRT.

use std::path::PathBuf;

use cuetrack_engine::writer::{generate_srt, save_srt};
use cuetrack_engine::ParseOptions;

pub fn run(path: PathBuf, output: Option<PathBuf>, options: &ParseOptions) -> anyhow::Result<()> {
    let track = super::load(&path, options)?;

    match output {
        Some(output) => {
            save_srt(&track.index, &options.line_break, &output)
                .map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", output.display()))?;
            eprintln!(
                "Wrote {} cues to {} ({} block(s) dropped)",
                track.index.len(),
                output.display(),
                track.skipped.len()
            );
        }
        None => print!("{}", generate_srt(&track.index, &options.line_break)),
    }

    Ok(())
}
