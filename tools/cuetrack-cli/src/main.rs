//! cuetrack CLI — Command-line interface for SubRip caption tracks.
//!
//! Usage:
//!   cuetrack inspect <PATH>          Summarize a track and list dropped blocks
//!   cuetrack at <PATH> <TIME>        Show the caption active at a playback time
//!   cuetrack replay <PATH>           Print show/hide transitions during playback
//!   cuetrack normalize <PATH>        Rewrite a track as clean SRT

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cuetrack_common::AppConfig;
use cuetrack_engine::ParseOptions;

mod commands;

#[derive(Parser)]
#[command(
    name = "cuetrack",
    about = "Parse SubRip subtitles and find the caption shown at any moment",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Fail on malformed timecodes instead of skipping the block
    #[arg(long, global = true)]
    strict: bool,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a subtitle track
    Inspect {
        /// Path to the .srt file
        path: PathBuf,
    },

    /// Show the caption active at a playback position
    At {
        /// Path to the .srt file
        path: PathBuf,

        /// Playback position: seconds (12.5) or timestamp (00:00:12,500)
        time: String,
    },

    /// Simulate playback and print caption transitions
    Replay {
        /// Path to the .srt file
        path: PathBuf,

        /// Time-update rate in Hz (defaults to the configured rate)
        #[arg(long)]
        rate: Option<u32>,

        /// Start position
        #[arg(long, default_value = "0")]
        from: String,

        /// End position (defaults to the end of the last caption)
        #[arg(long)]
        to: Option<String>,
    },

    /// Rewrite a track as clean, renumbered SRT
    Normalize {
        /// Path to the .srt file
        path: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = AppConfig::load();

    // Initialize logging
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    cuetrack_common::logging::init_logging(&config.logging);

    let mut options = ParseOptions::from(&config.parser);
    options.strict |= cli.strict;

    match cli.command {
        Commands::Inspect { path } => commands::inspect::run(path, &options, cli.json),
        Commands::At { path, time } => commands::at::run(path, &time, &options, cli.json),
        Commands::Replay {
            path,
            rate,
            from,
            to,
        } => commands::replay::run(
            path,
            &options,
            rate.unwrap_or(config.playback.tick_hz),
            config.playback.auto_enable,
            &from,
            to.as_deref(),
            cli.json,
        ),
        Commands::Normalize { path, output } => commands::normalize::run(path, output, &options),
    }
}
