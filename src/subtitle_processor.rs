use std::fmt;
use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use log::debug;

use crate::errors::{ParseError, ParseErrorKind, SubtitleError};
use crate::file_utils::FileManager;
use crate::timecode::TimeRange;

// @module: Subtitle track parsing

// @struct: Single subtitle entry
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleEntry {
    // @field: 1-based sequence number, equal to the entry's position
    pub index: usize,

    // @field: Display window; the only field the timeline engine touches
    pub time_range: TimeRange,

    // @field: Caption text lines, without the terminating blank line
    pub lines: Vec<String>,
}

impl SubtitleEntry {
    pub fn new(index: usize, start: f64, end: f64, lines: Vec<String>) -> Self {
        SubtitleEntry {
            index,
            time_range: TimeRange::new(start, end),
            lines,
        }
    }

    pub fn start(&self) -> f64 {
        self.time_range.start
    }

    pub fn end(&self) -> f64 {
        self.time_range.end
    }
}

impl fmt::Display for SubtitleEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.index)?;
        writeln!(f, "{}", self.time_range)?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)
    }
}

/// Read position in the input: the unread text plus the number of lines
/// already consumed. Each parsing phase takes a cursor by value and hands
/// back the advanced one, so no parser state outlives a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    remaining: &'a str,
    line_number: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(content: &'a str) -> Self {
        Cursor {
            remaining: content.strip_prefix('\u{feff}').unwrap_or(content),
            line_number: 0,
        }
    }

    /// Number of lines consumed so far (the 1-based number of the last line read)
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn is_at_end(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Read one line with trailing whitespace stripped, or `None` at end of input.
    pub fn next_line(self) -> Option<(&'a str, Cursor<'a>)> {
        if self.remaining.is_empty() {
            return None;
        }

        let (line, rest) = self.remaining
            .split_once('\n')
            .unwrap_or((self.remaining, ""));

        Some((line.trim_end(), Cursor {
            remaining: rest,
            line_number: self.line_number + 1,
        }))
    }
}

// Index phase: `None` means end of input between entries.
fn parse_index(cursor: Cursor<'_>, expected: usize) -> Result<Option<Cursor<'_>>, ParseError> {
    let Some((line, cursor)) = cursor.next_line() else {
        return Ok(None);
    };

    let is_number = !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit());
    if !is_number {
        return Err(ParseError {
            line: cursor.line_number(),
            kind: ParseErrorKind::NotAnIndex(line.to_string()),
        });
    }

    // All-digit text only fails to parse on overflow
    let Ok(found) = line.parse::<usize>() else {
        return Err(ParseError {
            line: cursor.line_number(),
            kind: ParseErrorKind::NotAnIndex(line.to_string()),
        });
    };
    if found != expected {
        return Err(ParseError {
            line: cursor.line_number(),
            kind: ParseErrorKind::IndexMismatch { expected, found },
        });
    }

    Ok(Some(cursor))
}

// Time phase: `None` means end of input between entries.
fn parse_time_line(cursor: Cursor<'_>) -> Result<Option<(TimeRange, Cursor<'_>)>, ParseError> {
    let Some((line, cursor)) = cursor.next_line() else {
        return Ok(None);
    };

    let timecode = match TimeRange::parse_line(line) {
        Some(Ok(range)) => return Ok(Some((range, cursor))),
        Some(Err(e)) => Some(e),
        None => None,
    };
    Err(ParseError {
        line: cursor.line_number(),
        kind: ParseErrorKind::MalformedTimeLine { line: line.to_string(), timecode },
    })
}

// Text phase: `None` means the block hit end of input before its blank line.
fn parse_text_lines(mut cursor: Cursor<'_>) -> Option<(Vec<String>, Cursor<'_>)> {
    let mut lines = Vec::new();
    loop {
        let (line, next) = cursor.next_line()?;
        cursor = next;
        if line.is_empty() {
            return Some((lines, cursor));
        }
        lines.push(line.to_string());
    }
}

/// Parse one entry starting at `cursor`.
///
/// `Ok(None)` signals the end of the track. A block whose text is not closed
/// by a blank line before end of input is also treated as the end of the
/// track and dropped.
pub fn parse_entry(cursor: Cursor<'_>, expected_index: usize) -> Result<Option<(SubtitleEntry, Cursor<'_>)>, ParseError> {
    let Some(cursor) = parse_index(cursor, expected_index)? else {
        return Ok(None);
    };
    let Some((time_range, cursor)) = parse_time_line(cursor)? else {
        return Ok(None);
    };
    let Some((lines, cursor)) = parse_text_lines(cursor) else {
        debug!("Entry {} is not terminated by a blank line, dropping it", expected_index);
        return Ok(None);
    };

    Ok(Some((SubtitleEntry { index: expected_index, time_range, lines }, cursor)))
}

/// Collection of subtitle entries read from one file
#[derive(Debug)]
pub struct SubtitleCollection {
    /// Source filename
    pub source_file: PathBuf,

    /// Entries in file order
    pub entries: Vec<SubtitleEntry>,
}

impl SubtitleCollection {
    /// Read and parse a subtitle file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = FileManager::read_to_string(path)?;
        let entries = Self::parse_srt_string(&content)
            .map_err(SubtitleError::from)
            .with_context(|| format!("Failed to parse subtitle file: {}", path.display()))?;

        Ok(SubtitleCollection {
            source_file: path.to_path_buf(),
            entries,
        })
    }

    /// Parse subtitle text into entries.
    ///
    /// The final entry must be followed by a blank line, otherwise it is
    /// silently dropped. Empty input yields an empty list.
    pub fn parse_srt_string(content: &str) -> Result<Vec<SubtitleEntry>, ParseError> {
        let mut entries = Vec::new();
        let mut cursor = Cursor::new(content);

        while let Some((entry, next)) = parse_entry(cursor, entries.len() + 1)? {
            debug!("Parsed entry {}: {}", entry.index, entry.time_range);
            entries.push(entry);
            cursor = next;
        }

        debug!("Processed {} entries", entries.len());
        Ok(entries)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
