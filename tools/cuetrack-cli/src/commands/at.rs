//! Show the caption active at a playback position.

use std::path::PathBuf;

use cuetrack_engine::ParseOptions;
use cuetrack_model::{parse_playback_position, seconds_to_human};

pub fn run(path: PathBuf, time: &str, options: &ParseOptions, json: bool) -> anyhow::Result<()> {
    let position = parse_playback_position(time)
        .map_err(|e| anyhow::anyhow!("Invalid playback position: {e}"))?;
    let track = super::load(&path, options)?;
    let cue = track.index.active_cue_at(position);

    if json {
        println!("{}", serde_json::to_string_pretty(&cue)?);
        return Ok(());
    }

    match cue {
        Some(cue) => {
            println!(
                "{} --> {}",
                seconds_to_human(cue.start_seconds()),
                seconds_to_human(cue.end_seconds())
            );
            for line in cue.lines(&options.line_break) {
                println!("{line}");
            }
        }
        None => println!("No caption at {}", seconds_to_human(position)),
    }

    Ok(())
}
