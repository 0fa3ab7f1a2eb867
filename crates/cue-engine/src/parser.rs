//! Lenient SubRip (SRT) parser.
//!
//! SRT is a sequence of blank-line separated blocks:
//!
//! ```text
//! 1
//! 00:00:01,000 --> 00:00:02,500
//! First caption line
//! Second caption line
//!
//! 2
//! ...
//! ```
//!
//! Real files are messy: missing or doubled blank lines, index lines padded
//! with whitespace, `.` instead of `,` before the milliseconds, mixed line
//! endings. The parser walks the text line by line with a small state
//! machine and drops malformed blocks instead of failing the whole track.
//! Every dropped block is recorded in the [`ParseReport`].

use cuetrack_common::ParserDefaults;
use cuetrack_model::{parse_timecode_line, Cue};
use serde::Serialize;

/// Errors returned by [`CueParser::parse`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// No block in the input produced a cue.
    #[error("no subtitle cues found")]
    Empty,

    /// Strict mode only: the line after an index line is not a timecode.
    #[error("line {line}: expected a timecode, found {found:?}")]
    InvalidTimestamp { line: usize, found: String },

    /// Strict mode only: a timecode whose end precedes its start.
    #[error("line {line}: cue ends before it starts ({start}s --> {end}s)")]
    InvertedRange { line: usize, start: f64, end: f64 },
}

/// Parser settings.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Return an error for malformed timecodes instead of skipping the block.
    pub strict: bool,

    /// Token inserted between caption lines of a multi-line cue.
    pub line_break: String,

    /// Drop cues whose start equals their end.
    pub reject_zero_length: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::from(&ParserDefaults::default())
    }
}

impl From<&ParserDefaults> for ParseOptions {
    fn from(defaults: &ParserDefaults) -> Self {
        Self {
            strict: defaults.strict,
            line_break: defaults.line_break.clone(),
            reject_zero_length: defaults.reject_zero_length,
        }
    }
}

/// Why a block was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The line after the index is not a valid timecode pair.
    MalformedTimecode,
    /// The index line is followed by a blank line or the end of input.
    MissingTimecode,
    /// The timecode is followed directly by a blank line.
    EmptyText,
    /// The end time precedes the start time.
    InvertedRange,
    /// Start equals end and zero-length cues are rejected.
    ZeroLength,
}

/// A dropped block, identified by the line of its index (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkippedBlock {
    pub line: usize,
    pub reason: SkipReason,
}

/// Cues in source order plus diagnostics about what was discarded.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseReport {
    pub cues: Vec<Cue>,
    pub skipped: Vec<SkippedBlock>,
    /// Non-blank lines found where an index line was expected.
    pub stray_lines: usize,
}

impl ParseReport {
    pub fn skipped_blocks(&self) -> usize {
        self.skipped.len()
    }
}

/// A block whose timecode has been read and whose text is being collected.
struct OpenBlock {
    index_line: usize,
    timecode_line: usize,
    start: f64,
    end: f64,
    text: String,
}

enum State {
    AwaitingIndex,
    AwaitingTimecode { index_line: usize },
    AccumulatingText(OpenBlock),
}

/// SRT parser. Cheap to construct; holds only its options.
#[derive(Debug, Clone, Default)]
pub struct CueParser {
    options: ParseOptions,
}

impl CueParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse SRT text into cues, in the order they appear in the source.
    pub fn parse(&self, raw: &str) -> Result<Vec<Cue>, ParseError> {
        self.parse_with_report(raw).map(|report| report.cues)
    }

    /// Parse SRT text and keep the skip diagnostics.
    pub fn parse_with_report(&self, raw: &str) -> Result<ParseReport, ParseError> {
        let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
        let mut report = ParseReport::default();
        let mut state = State::AwaitingIndex;
        let mut last_line = 0;

        for (idx, line) in split_lines(raw).enumerate() {
            let line_no = idx + 1;
            last_line = line_no;
            let blank = line.trim().is_empty();

            state = match state {
                State::AwaitingIndex => {
                    if blank {
                        State::AwaitingIndex
                    } else if is_index_line(line) {
                        State::AwaitingTimecode {
                            index_line: line_no,
                        }
                    } else {
                        tracing::trace!(line = line_no, "skipping stray line");
                        report.stray_lines += 1;
                        State::AwaitingIndex
                    }
                }
                State::AwaitingTimecode { index_line } => match parse_timecode_line(line) {
                    Some((start, end)) => State::AccumulatingText(OpenBlock {
                        index_line,
                        timecode_line: line_no,
                        start,
                        end,
                        text: String::new(),
                    }),
                    None => {
                        if self.options.strict {
                            return Err(ParseError::InvalidTimestamp {
                                line: line_no,
                                found: line.trim().to_string(),
                            });
                        }
                        let reason = if blank {
                            SkipReason::MissingTimecode
                        } else {
                            SkipReason::MalformedTimecode
                        };
                        skip(&mut report, index_line, reason);
                        State::AwaitingIndex
                    }
                },
                State::AccumulatingText(mut block) => {
                    if blank {
                        self.close_block(block, &mut report)?;
                        State::AwaitingIndex
                    } else {
                        if !block.text.is_empty() {
                            block.text.push_str(&self.options.line_break);
                        }
                        block.text.push_str(line.trim());
                        State::AccumulatingText(block)
                    }
                }
            };
        }

        match state {
            State::AwaitingIndex => {}
            State::AwaitingTimecode { index_line } => {
                if self.options.strict {
                    return Err(ParseError::InvalidTimestamp {
                        line: last_line + 1,
                        found: String::new(),
                    });
                }
                skip(&mut report, index_line, SkipReason::MissingTimecode);
            }
            State::AccumulatingText(block) => self.close_block(block, &mut report)?,
        }

        tracing::debug!(
            cues = report.cues.len(),
            skipped = report.skipped.len(),
            stray_lines = report.stray_lines,
            "parsed subtitle track"
        );

        if report.cues.is_empty() {
            return Err(ParseError::Empty);
        }
        Ok(report)
    }

    fn close_block(&self, block: OpenBlock, report: &mut ParseReport) -> Result<(), ParseError> {
        if block.text.is_empty() {
            skip(report, block.index_line, SkipReason::EmptyText);
            return Ok(());
        }
        match Cue::new(block.start, block.end, block.text) {
            Ok(cue) if cue.is_zero_length() && self.options.reject_zero_length => {
                skip(report, block.index_line, SkipReason::ZeroLength);
            }
            Ok(cue) => report.cues.push(cue),
            Err(_) if self.options.strict => {
                return Err(ParseError::InvertedRange {
                    line: block.timecode_line,
                    start: block.start,
                    end: block.end,
                });
            }
            Err(_) => skip(report, block.index_line, SkipReason::InvertedRange),
        }
        Ok(())
    }
}

/// Parse SRT text with default options.
pub fn parse(raw: &str) -> Result<Vec<Cue>, ParseError> {
    CueParser::default().parse(raw)
}

fn skip(report: &mut ParseReport, line: usize, reason: SkipReason) {
    tracing::debug!(line, ?reason, "dropping subtitle block");
    report.skipped.push(SkippedBlock { line, reason });
}

/// An index line holds a whole number, possibly padded with whitespace.
/// The value itself is not used.
fn is_index_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.parse::<i64>().is_ok()
        || trimmed
            .parse::<f64>()
            .map(|v| v.is_finite() && v.fract() == 0.0)
            .unwrap_or(false)
}

/// Split on `\n`, `\r\n` and lone `\r`.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}
