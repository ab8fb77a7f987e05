/*!
 * Import of plain video-site transcripts into subtitle entries.
 *
 * A transcript has one cue per line, `M:SS` followed by the caption text:
 *
 * ```text
 * 0:00 welcome back
 * 0:04 today we look at fractions
 * 1:12 let's start
 * ```
 *
 * Each cue is shown until the next cue's timestamp. The first cue is anchored
 * at 0:00 and the last one runs until the `99:99` end-of-track sentinel.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{ParseError, ParseErrorKind};
use crate::subtitle_processor::SubtitleEntry;

// @const: Transcript cue line, minutes of any width and two-digit seconds
static CUE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+):([0-9]{2})(.*)$").unwrap()
});

/// End time of the last cue: 99 minutes 99 seconds
pub const FINAL_CUE_END_SECS: f64 = 99.0 * 60.0 + 99.0;

struct Cue {
    at: f64,
    text: String,
}

fn parse_cue(line: &str, line_number: usize) -> Result<Cue, ParseError> {
    let malformed = || ParseError {
        line: line_number,
        kind: ParseErrorKind::MalformedTranscriptLine(line.to_string()),
    };

    let caps = CUE_REGEX.captures(line).ok_or_else(malformed)?;
    let minutes: u64 = caps[1].parse().map_err(|_| malformed())?;
    let seconds: u64 = caps[2].parse().map_err(|_| malformed())?;
    let total = minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds))
        .ok_or_else(malformed)?;

    Ok(Cue {
        at: total as f64,
        text: caps[3].trim().to_string(),
    })
}

/// Convert transcript text into sequentially numbered subtitle entries.
///
/// Blank lines are skipped; any other line that does not start with `M:SS`
/// is a `ParseError`.
pub fn parse_transcript(content: &str) -> Result<Vec<SubtitleEntry>, ParseError> {
    let mut cues = Vec::new();
    for (i, raw) in content.lines().enumerate() {
        let line = raw.trim_end();
        if line.is_empty() {
            continue;
        }
        cues.push(parse_cue(line, i + 1)?);
    }

    let mut entries = Vec::with_capacity(cues.len());
    let mut start = 0.0;
    for (i, cue) in cues.iter().enumerate() {
        let end = match cues.get(i + 1) {
            Some(next) => next.at,
            None => FINAL_CUE_END_SECS.max(start),
        };
        entries.push(SubtitleEntry::new(i + 1, start, end, vec![cue.text.clone()]));
        start = end;
    }

    Ok(entries)
}
