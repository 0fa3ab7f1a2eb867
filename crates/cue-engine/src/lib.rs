//! cuetrack Engine
//!
//! Turns SubRip text into a queryable caption track:
//! - **Parser:** Lenient line-oriented SRT reader with skip diagnostics
//! - **Index:** Sorted cues with O(log n) active-cue lookup
//! - **Session:** Shown/hidden caption state driven by playback ticks
//! - **Writer:** Canonical SRT output
//!
//! Parsing and lookup are pure computation. Only [`loader`] touches the
//! filesystem.

pub mod index;
pub mod loader;
pub mod parser;
pub mod session;
pub mod writer;

pub use index::CueIndex;
pub use loader::{load_track, LoadedTrack};
pub use parser::{parse, CueParser, ParseError, ParseOptions, ParseReport};
pub use session::{CaptionSession, CaptionUpdate};
pub use writer::generate_srt;
