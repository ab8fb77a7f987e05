use std::fmt::Write;
use serde::{Deserialize, Serialize};

use crate::errors::EmptyInputError;
use crate::subtitle_processor::SubtitleEntry;

// @module: Output renderers for a parsed (and possibly repaired) track

/// Output shape of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Entries re-rendered exactly as parsed (debugging, round-trip checks)
    Raw,
    /// Text lines only, for a flat transcript
    #[default]
    Text,
    /// Index and time line followed by the text lines written back to back
    #[serde(alias = "srtcatline")]
    Concatenated,
}

impl OutputMode {
    /// Render `entries` in this shape.
    ///
    /// Fails on an empty track rather than producing an empty file.
    pub fn render(&self, entries: &[SubtitleEntry]) -> Result<String, EmptyInputError> {
        if entries.is_empty() {
            return Err(EmptyInputError);
        }

        let mut out = String::new();
        for entry in entries {
            match self {
                Self::Raw => write_raw(&mut out, entry),
                Self::Text => write_text(&mut out, entry),
                Self::Concatenated => write_concatenated(&mut out, entry),
            }
        }
        Ok(out)
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Raw => write!(f, "raw"),
            Self::Text => write!(f, "text"),
            Self::Concatenated => write!(f, "concatenated"),
        }
    }
}

// Writing into a String cannot fail, so the fmt results are dropped.

fn write_raw(out: &mut String, entry: &SubtitleEntry) {
    let _ = writeln!(out, "{}", entry.index);
    let _ = writeln!(out, "{}", entry.time_range);
    for line in &entry.lines {
        let _ = writeln!(out, "{}", line);
    }
    out.push('\n');
}

fn write_text(out: &mut String, entry: &SubtitleEntry) {
    for line in &entry.lines {
        let _ = write!(out, "{}\n\n", line);
    }
}

fn write_concatenated(out: &mut String, entry: &SubtitleEntry) {
    let _ = write!(out, "{}", entry);
}
