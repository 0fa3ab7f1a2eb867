//! cuetrack Track Model
//!
//! Defines the core data contracts for subtitle tracks:
//! - **Cue:** A validated, immutable time range with caption text
//! - **Timestamps:** Conversion between SubRip `HH:MM:SS,mmm` and seconds
//!
//! All times are fractional seconds from the start of playback.

pub mod cue;
pub mod timestamp;

pub use cue::*;
pub use timestamp::*;
