//! SubRip timestamp conversion.
//!
//! SRT timestamps look like `HH:MM:SS,mmm`. Many producers write a period
//! instead of the comma, so both are accepted when reading. Writing always
//! uses the comma.

use once_cell::sync::Lazy;
use regex::Regex;

/// A full timecode line: `start --> end`, one space either side of the arrow.
static TIMECODE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([0-9]{2}:[0-9]{2}:[0-9]{2}[,.][0-9]{3}) --> ([0-9]{2}:[0-9]{2}:[0-9]{2}[,.][0-9]{3})$",
    )
    .expect("timecode pattern is valid")
});

/// Errors produced when reading a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    #[error("malformed timestamp {input:?}: expected HH:MM:SS,mmm")]
    WrongShape { input: String },

    #[error("malformed timestamp {input:?}: {field} is not a number")]
    NonNumeric { input: String, field: &'static str },
}

/// Convert `HH:MM:SS,mmm` (or `HH:MM:SS.mmm`) to seconds.
///
/// Minute and second fields of 60 or more are not rejected; they are added
/// arithmetically, so `00:61:00,000` is 3660 seconds.
pub fn human_to_seconds(input: &str) -> Result<f64, TimestampError> {
    let trimmed = input.trim();
    let wrong_shape = || TimestampError::WrongShape {
        input: trimmed.to_string(),
    };

    let mut fields = trimmed.split(':');
    let (Some(hours), Some(minutes), Some(rest), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(wrong_shape());
    };
    let (seconds, fraction) = rest.split_once([',', '.']).ok_or_else(wrong_shape)?;

    let hours = parse_field(trimmed, hours, "hours")?;
    let minutes = parse_field(trimmed, minutes, "minutes")?;
    let seconds = parse_field(trimmed, seconds, "seconds")?;
    let fraction = parse_fraction(trimmed, fraction)?;

    Ok(hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds as f64 + fraction)
}

/// Convert seconds to `HH:MM:SS,mmm`, rounded to the nearest millisecond.
///
/// Negative and non-finite values render as `00:00:00,000`.
pub fn seconds_to_human(secs: f64) -> String {
    let total_ms = if secs.is_finite() && secs > 0.0 {
        (secs * 1000.0).round() as u64
    } else {
        0
    };
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let seconds = (total_ms % 60_000) / 1000;
    let millis = total_ms % 1000;
    format!("{hours:02}:{minutes:02}:{seconds:02},{millis:03}")
}

/// Match a timecode line and return `(start, end)` in seconds.
///
/// The line is trimmed first; anything else on it (cue settings, a
/// different arrow spacing) makes it a non-match.
pub fn parse_timecode_line(line: &str) -> Option<(f64, f64)> {
    let caps = TIMECODE_LINE.captures(line.trim())?;
    let start = human_to_seconds(&caps[1]).ok()?;
    let end = human_to_seconds(&caps[2]).ok()?;
    Some((start, end))
}

/// Read a playback position given either as plain seconds (`"12.5"`) or as
/// a SubRip timestamp (`"00:00:12,500"`).
pub fn parse_playback_position(input: &str) -> Result<f64, TimestampError> {
    let trimmed = input.trim();
    if trimmed.contains(':') {
        return human_to_seconds(trimmed);
    }
    match trimmed.parse::<f64>() {
        Ok(secs) if secs.is_finite() => Ok(secs),
        _ => Err(TimestampError::NonNumeric {
            input: trimmed.to_string(),
            field: "seconds",
        }),
    }
}

fn parse_field(input: &str, field: &str, name: &'static str) -> Result<u64, TimestampError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimestampError::NonNumeric {
            input: input.to_string(),
            field: name,
        });
    }
    field.parse().map_err(|_| TimestampError::NonNumeric {
        input: input.to_string(),
        field: name,
    })
}

/// The millisecond field is a decimal fraction: `5` is half a second, the
/// same as `500`.
fn parse_fraction(input: &str, field: &str) -> Result<f64, TimestampError> {
    if field.is_empty() || field.len() > 9 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimestampError::NonNumeric {
            input: input.to_string(),
            field: "milliseconds",
        });
    }
    let digits: u64 = field.parse().map_err(|_| TimestampError::NonNumeric {
        input: input.to_string(),
        field: "milliseconds",
    })?;
    Ok(digits as f64 / 10f64.powi(field.len() as i32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_human_to_seconds() {
        assert!((human_to_seconds("00:00:01,000").unwrap() - 1.0).abs() < 1e-9);
        assert!((human_to_seconds("00:00:02,500").unwrap() - 2.5).abs() < 1e-9);
        assert!((human_to_seconds("01:01:01,500").unwrap() - 3661.5).abs() < 1e-9);
    }

    #[test]
    fn test_period_separator_is_accepted() {
        assert_eq!(
            human_to_seconds("00:01:02.250").unwrap(),
            human_to_seconds("00:01:02,250").unwrap()
        );
    }

    #[test]
    fn test_overflowing_minutes_normalize() {
        assert!((human_to_seconds("00:61:00,000").unwrap() - 3660.0).abs() < 1e-9);
        assert!((human_to_seconds("00:00:75,000").unwrap() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_non_numeric_components() {
        assert_eq!(
            human_to_seconds("aa:00:01,000"),
            Err(TimestampError::NonNumeric {
                input: "aa:00:01,000".to_string(),
                field: "hours"
            })
        );
        assert!(matches!(
            human_to_seconds("00:00:01,x00"),
            Err(TimestampError::NonNumeric {
                field: "milliseconds",
                ..
            })
        ));
        assert!(matches!(
            human_to_seconds("00:-1:01,000"),
            Err(TimestampError::NonNumeric { field: "minutes", .. })
        ));
    }

    #[test]
    fn test_rejects_wrong_shape() {
        for input in ["", "garbage", "00:01,000", "00:00:00:01,000", "00:00:01"] {
            assert!(
                matches!(
                    human_to_seconds(input),
                    Err(TimestampError::WrongShape { .. })
                ),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_seconds_to_human() {
        assert_eq!(seconds_to_human(0.0), "00:00:00,000");
        assert_eq!(seconds_to_human(3661.5), "01:01:01,500");
        assert_eq!(seconds_to_human(2.0004), "00:00:02,000");
        assert_eq!(seconds_to_human(2.0006), "00:00:02,001");
        assert_eq!(seconds_to_human(-4.0), "00:00:00,000");
        assert_eq!(seconds_to_human(f64::NAN), "00:00:00,000");
    }

    #[test]
    fn test_timecode_line() {
        assert_eq!(
            parse_timecode_line("00:00:01,000 --> 00:00:02,500"),
            Some((1.0, 2.5))
        );
        assert_eq!(
            parse_timecode_line("  00:00:01.000 --> 00:00:02,500\t"),
            Some((1.0, 2.5))
        );
        assert_eq!(parse_timecode_line("garbage --> timecode"), None);
        assert_eq!(parse_timecode_line("00:00:01,000-->00:00:02,500"), None);
        assert_eq!(parse_timecode_line("00:00:01,000  -->  00:00:02,500"), None);
        assert_eq!(
            parse_timecode_line("00:00:01,000 --> 00:00:02,500 X1:10"),
            None
        );
        assert_eq!(parse_timecode_line("0:00:01,000 --> 00:00:02,500"), None);
    }

    #[test]
    fn test_playback_position() {
        assert_eq!(parse_playback_position("12.5").unwrap(), 12.5);
        assert_eq!(parse_playback_position("-3").unwrap(), -3.0);
        assert_eq!(parse_playback_position("00:00:12,500").unwrap(), 12.5);
        assert!(parse_playback_position("soon").is_err());
        assert!(parse_playback_position("inf").is_err());
    }

    proptest! {
        #[test]
        fn prop_human_round_trip(
            h in 0u64..100,
            m in 0u64..60,
            s in 0u64..60,
            ms in 0u64..1000,
            period in any::<bool>(),
        ) {
            let sep = if period { '.' } else { ',' };
            let input = format!("{h:02}:{m:02}:{s:02}{sep}{ms:03}");
            let secs = human_to_seconds(&input).unwrap();
            let canonical = format!("{h:02}:{m:02}:{s:02},{ms:03}");
            prop_assert_eq!(seconds_to_human(secs), canonical);
        }

        #[test]
        fn prop_seconds_round_trip(total_ms in 0u64..360_000_000) {
            let secs = total_ms as f64 / 1000.0;
            let back = human_to_seconds(&seconds_to_human(secs)).unwrap();
            prop_assert!((back - secs).abs() < 1e-6);
        }
    }
}
