//! Subtitle cue type.
//!
//! A cue is created once, from parsed subtitle text, and never changes
//! afterwards. Its fields are private so the range invariant established by
//! [`Cue::new`] cannot be broken later.

use serde::Serialize;

/// Errors produced when a cue's time range is invalid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CueError {
    #[error("cue times must be finite (start {start}, end {end})")]
    NotFinite { start: f64, end: f64 },

    #[error("cue starts before zero ({start}s)")]
    NegativeStart { start: f64 },

    #[error("cue ends before it starts ({start}s --> {end}s)")]
    InvertedRange { start: f64, end: f64 },
}

/// One subtitle entry: a time range and the caption shown during it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cue {
    start_seconds: f64,
    end_seconds: f64,
    /// Caption lines joined by the parser's line-break marker.
    text: String,
}

impl Cue {
    /// Create a cue, checking `0 <= start <= end`.
    ///
    /// Zero-length cues (`start == end`) are accepted.
    pub fn new(
        start_seconds: f64,
        end_seconds: f64,
        text: impl Into<String>,
    ) -> Result<Self, CueError> {
        if !start_seconds.is_finite() || !end_seconds.is_finite() {
            return Err(CueError::NotFinite {
                start: start_seconds,
                end: end_seconds,
            });
        }
        if start_seconds < 0.0 {
            return Err(CueError::NegativeStart {
                start: start_seconds,
            });
        }
        if end_seconds < start_seconds {
            return Err(CueError::InvertedRange {
                start: start_seconds,
                end: end_seconds,
            });
        }
        Ok(Self {
            start_seconds,
            end_seconds,
            text: text.into(),
        })
    }

    pub fn start_seconds(&self) -> f64 {
        self.start_seconds
    }

    pub fn end_seconds(&self) -> f64 {
        self.end_seconds
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn duration_seconds(&self) -> f64 {
        self.end_seconds - self.start_seconds
    }

    pub fn is_zero_length(&self) -> bool {
        self.end_seconds == self.start_seconds
    }

    /// Whether the cue is active at `time_seconds`. Both ends are inclusive.
    pub fn contains(&self, time_seconds: f64) -> bool {
        self.start_seconds <= time_seconds && time_seconds <= self.end_seconds
    }

    /// Split the text back into caption lines at `line_break`.
    ///
    /// An empty marker cannot be located in the text, so the whole text is
    /// yielded as a single line.
    pub fn lines<'a>(&'a self, line_break: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let marker = (!line_break.is_empty()).then_some(line_break);
        let mut rest = Some(self.text.as_str());
        std::iter::from_fn(move || {
            let current = rest?;
            match marker.and_then(|m| current.split_once(m)) {
                Some((line, tail)) => {
                    rest = Some(tail);
                    Some(line)
                }
                None => {
                    rest = None;
                    Some(current)
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_cue() {
        let cue = Cue::new(1.0, 2.5, "Hello").unwrap();
        assert_eq!(cue.start_seconds(), 1.0);
        assert_eq!(cue.end_seconds(), 2.5);
        assert_eq!(cue.text(), "Hello");
        assert!((cue.duration_seconds() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_zero_length_is_accepted() {
        let cue = Cue::new(3.0, 3.0, "blink").unwrap();
        assert!(cue.is_zero_length());
        assert!(cue.contains(3.0));
    }

    #[test]
    fn test_invalid_ranges_are_rejected() {
        assert_eq!(
            Cue::new(2.0, 1.0, "x"),
            Err(CueError::InvertedRange {
                start: 2.0,
                end: 1.0
            })
        );
        assert_eq!(
            Cue::new(-0.5, 1.0, "x"),
            Err(CueError::NegativeStart { start: -0.5 })
        );
        assert!(matches!(
            Cue::new(0.0, f64::INFINITY, "x"),
            Err(CueError::NotFinite { .. })
        ));
        assert!(matches!(
            Cue::new(f64::NAN, 1.0, "x"),
            Err(CueError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let cue = Cue::new(1.0, 2.0, "x").unwrap();
        assert!(cue.contains(1.0));
        assert!(cue.contains(1.5));
        assert!(cue.contains(2.0));
        assert!(!cue.contains(0.999));
        assert!(!cue.contains(2.001));
        assert!(!cue.contains(f64::NAN));
    }

    #[test]
    fn test_lines() {
        let cue = Cue::new(0.0, 1.0, "first<br />second").unwrap();
        let lines: Vec<&str> = cue.lines("<br />").collect();
        assert_eq!(lines, vec!["first", "second"]);

        let trailing = Cue::new(0.0, 1.0, "first<br />").unwrap();
        let lines: Vec<&str> = trailing.lines("<br />").collect();
        assert_eq!(lines, vec!["first", ""]);
    }

    #[test]
    fn test_lines_with_empty_marker_is_single_line() {
        let cue = Cue::new(0.0, 1.0, "OneTwo").unwrap();
        let lines: Vec<&str> = cue.lines("").collect();
        assert_eq!(lines, vec!["OneTwo"]);
    }

    #[test]
    fn test_json_field_names() {
        let cue = Cue::new(1.0, 2.5, "Hello").unwrap();
        let json = serde_json::to_string(&cue).unwrap();
        assert_eq!(
            json,
            r#"{"start_seconds":1.0,"end_seconds":2.5,"text":"Hello"}"#
        );
    }
}
