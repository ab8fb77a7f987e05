use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::errors::FormatError;

// @module: Conversion between SRT timecodes and floating-point seconds

// @const: A single HH:MM:SS,mmm timecode
static TIMECODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2}):([0-9]{2}):([0-9]{2}),([0-9]{3})$").unwrap()
});

// @const: A full time line, exactly one space each side of the arrow
static TIME_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2}:[0-9]{2}:[0-9]{2},[0-9]{3}) --> ([0-9]{2}:[0-9]{2}:[0-9]{2},[0-9]{3})$").unwrap()
});

/// Absorbs binary representation error (e.g. 5.49 * 1000 = 5489.999...)
/// before truncating to whole milliseconds. Far below one millisecond, so
/// genuinely sub-millisecond values still truncate.
const MS_REPRESENTATION_SLACK: f64 = 1e-6;

/// Parse `HH:MM:SS,mmm` into seconds.
///
/// Minutes and seconds above 59 are rejected so that every accepted string
/// formats back to itself.
pub fn parse_timecode(text: &str) -> Result<f64, FormatError> {
    let caps = TIMECODE_REGEX
        .captures(text)
        .ok_or_else(|| FormatError::new(text))?;

    let field = |idx: usize| -> Result<u32, FormatError> {
        caps.get(idx)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .ok_or_else(|| FormatError::new(text))
    };

    let hours = field(1)?;
    let minutes = field(2)?;
    let seconds = field(3)?;
    let millis = field(4)?;

    if minutes >= 60 || seconds >= 60 {
        return Err(FormatError::new(text));
    }

    Ok(f64::from(hours) * 3600.0
        + f64::from(minutes) * 60.0
        + f64::from(seconds)
        + f64::from(millis) / 1000.0)
}

/// Format seconds as `HH:MM:SS,mmm`, truncating (never rounding) to the
/// millisecond. Negative and non-finite input clamps to zero.
///
/// Known limitation: a value that lands a hair under a millisecond boundary
/// through arithmetic (rather than through `parse_timecode`) truncates to the
/// millisecond below.
pub fn format_timecode(seconds: f64) -> String {
    let total_ms = if seconds.is_finite() && seconds > 0.0 {
        (seconds * 1000.0 + MS_REPRESENTATION_SLACK).floor() as u64
    } else {
        0
    };

    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1_000;
    let millis = total_ms % 1_000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}

/// Display window of one entry, in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    pub start: f64,
    pub end: f64,
}

impl TimeRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Parse a `start --> end` time line.
    ///
    /// Returns `None` when the line does not have the arrow shape at all,
    /// and a `FormatError` when the shape matches but a timecode is invalid.
    pub fn parse_line(line: &str) -> Option<Result<Self, FormatError>> {
        let caps = TIME_LINE_REGEX.captures(line)?;
        let start = caps.get(1).map_or("", |m| m.as_str());
        let end = caps.get(2).map_or("", |m| m.as_str());

        Some(parse_timecode(start).and_then(|start| {
            parse_timecode(end).map(|end| Self::new(start, end))
        }))
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} --> {}", format_timecode(self.start), format_timecode(self.end))
    }
}
