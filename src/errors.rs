/*!
 * Error types for the srtconv application.
 *
 * Every failure is fatal: nothing here is retried or recovered internally.
 * Each error carries enough context (line number, entry index, offending
 * values) for the caller to fix the input.
 */

use thiserror::Error;

/// A timecode string that does not match `HH:MM:SS,mmm`
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Malformed timecode: '{text}' (expected HH:MM:SS,mmm)")]
pub struct FormatError {
    /// The offending text
    pub text: String,
}

impl FormatError {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// What went wrong at a given line of a subtitle or transcript file
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// The index line is not an unsigned integer (also hit on doubled blank lines)
    #[error("expected an entry number, found '{0}'")]
    NotAnIndex(String),

    /// The index line is a number but not the next one in sequence
    #[error("unexpected entry number: expected {expected}, found {found}")]
    IndexMismatch {
        expected: usize,
        found: usize,
    },

    /// The line after the index is not `start --> end`, or one of its
    /// timecodes is invalid (`timecode` is then set)
    #[error(
        "malformed time line '{line}'{}",
        .timecode.as_ref().map(|e| format!(": {}", e)).unwrap_or_default()
    )]
    MalformedTimeLine {
        line: String,
        timecode: Option<FormatError>,
    },

    /// A transcript line that does not start with `M:SS`
    #[error("malformed transcript line '{0}'")]
    MalformedTranscriptLine(String),
}

/// Structural violation of the subtitle block grammar
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Parse error at line {line}: {kind}")]
pub struct ParseError {
    /// 1-based line number in the input
    pub line: usize,
    pub kind: ParseErrorKind,
}

/// Timeline inconsistencies the repair engine refuses to paper over
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimelineError {
    /// A single entry ends before it starts
    #[error("Inconsistent time at entry {index}: start {start} > end {end}")]
    InvertedRange {
        index: usize,
        start: f64,
        end: f64,
    },

    /// The next entry starts before the current one ends, and shifting it
    /// past the current end would push it beyond its own end
    #[error(
        "Inconsistent timeline between entries {index} and {next_index}: \
         end {end} > next start {next_start}, but next end is {next_end}; \
         cannot be fixed within tolerance {tolerance}"
    )]
    UnresolvableOverlap {
        index: usize,
        next_index: usize,
        end: f64,
        next_start: f64,
        next_end: f64,
        tolerance: f64,
    },
}

/// Zero entries were available to emit
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("No parsed subtitle entries to output (empty or truncated input)")]
pub struct EmptyInputError;

/// Errors that can occur during subtitle processing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubtitleError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Timeline(#[from] TimelineError),

    #[error(transparent)]
    EmptyInput(#[from] EmptyInputError),
}
