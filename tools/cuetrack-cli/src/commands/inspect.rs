//! Summarize a subtitle track.

use std::path::PathBuf;

use cuetrack_engine::parser::SkippedBlock;
use cuetrack_engine::ParseOptions;
use cuetrack_model::seconds_to_human;
use serde::Serialize;

#[derive(Serialize)]
struct Summary<'a> {
    path: String,
    cues: usize,
    duration_seconds: f64,
    overlaps: usize,
    skipped: &'a [SkippedBlock],
    stray_lines: usize,
}

pub fn run(path: PathBuf, options: &ParseOptions, json: bool) -> anyhow::Result<()> {
    let track = super::load(&path, options)?;
    let index = &track.index;

    if json {
        let summary = Summary {
            path: path.display().to_string(),
            cues: index.len(),
            duration_seconds: index.duration_seconds(),
            overlaps: index.overlap_count(),
            skipped: &track.skipped,
            stray_lines: track.stray_lines,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Track: {}", path.display());
    println!("  Cues: {}", index.len());
    println!(
        "  Duration: {}",
        seconds_to_human(index.duration_seconds())
    );
    println!("  Overlapping cues: {}", index.overlap_count());
    if let (Some(first), Some(last)) = (index.cues().first(), index.cues().last()) {
        println!(
            "  First caption: {} ({})",
            seconds_to_human(first.start_seconds()),
            first.text()
        );
        println!(
            "  Last caption: {} ({})",
            seconds_to_human(last.start_seconds()),
            last.text()
        );
    }
    println!();

    if track.skipped.is_empty() && track.stray_lines == 0 {
        println!("No malformed blocks.");
    } else {
        println!("Dropped blocks:");
        for block in &track.skipped {
            println!("  - line {}: {:?}", block.line, block.reason);
        }
        println!("Stray lines ignored: {}", track.stray_lines);
    }

    Ok(())
}
