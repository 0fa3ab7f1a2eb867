//! cuetrack Common Utilities
//!
//! Shared infrastructure for all cuetrack crates:
//! - Error types and result aliases
//! - Simulated playback time-update ticks
//! - Tracing/logging initialization
//! - Configuration loading

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
