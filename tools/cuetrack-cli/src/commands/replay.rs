//! Simulate playback and print caption transitions.

use std::path::PathBuf;
use std::sync::Arc;

use cuetrack_common::PlaybackTicks;
use cuetrack_engine::{CaptionSession, CaptionUpdate, ParseOptions};
use cuetrack_model::{parse_playback_position, seconds_to_human};
use serde::Serialize;

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Transition<'a> {
    Show { at: f64, position: usize, text: &'a str },
    Hide { at: f64 },
}

pub fn run(
    path: PathBuf,
    options: &ParseOptions,
    rate_hz: u32,
    auto_enable: bool,
    from: &str,
    to: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let from = parse_playback_position(from)
        .map_err(|e| anyhow::anyhow!("Invalid start position: {e}"))?;
    let track = super::load(&path, options)?;
    let to = match to {
        Some(to) => parse_playback_position(to)
            .map_err(|e| anyhow::anyhow!("Invalid end position: {e}"))?,
        None => track.index.duration_seconds(),
    };

    tracing::info!(from, to, rate_hz, "replaying {}", path.display());

    let mut session = CaptionSession::new(Arc::new(track.index), auto_enable);
    let mut transitions = 0usize;

    for t in PlaybackTicks::new(from, to, rate_hz) {
        match session.on_time_update(t) {
            CaptionUpdate::Unchanged => continue,
            CaptionUpdate::Show { position, text } => {
                if json {
                    let event = Transition::Show {
                        at: t,
                        position,
                        text: &text,
                    };
                    println!("{}", serde_json::to_string(&event)?);
                } else {
                    println!("{}  show  {}", seconds_to_human(t), text);
                }
            }
            CaptionUpdate::Hide => {
                if json {
                    println!("{}", serde_json::to_string(&Transition::Hide { at: t })?);
                } else {
                    println!("{}  hide", seconds_to_human(t));
                }
            }
        }
        transitions += 1;
    }

    tracing::debug!(transitions, "replay finished");
    Ok(())
}
