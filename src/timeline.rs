/*!
 * Timeline repair for parsed subtitle tracks.
 *
 * The `remove_gap` policy stretches each entry's end time to meet the next
 * entry's start, so captions stay on screen instead of flickering off between
 * chopped fragments. Small overlaps are repaired by pushing the *next* entry's
 * start forward; the current entry is never shortened.
 *
 * Each decision depends on the possibly adjusted end of the previous entry,
 * so the whole track is processed before anything is emitted.
 */

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::errors::TimelineError;
use crate::subtitle_processor::SubtitleEntry;
use crate::timecode::TimeRange;

/// Gaps and overlaps up to this many seconds count as "touching"
pub const DEFAULT_TOLERANCE_SECS: f64 = 0.02;

/// How the timeline is normalized before output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimelinePolicy {
    /// Pass times through unchanged
    #[default]
    None,
    /// Close gaps and repair small overlaps
    #[serde(alias = "rm_gap")]
    RemoveGap,
}

impl std::fmt::Display for TimelinePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::RemoveGap => write!(f, "remove_gap"),
        }
    }
}

/// One change made while repairing the timeline
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineAdjustment {
    /// Entry `index` started before the previous entry ended; its start moved forward
    OverlapShifted {
        index: usize,
        from: f64,
        to: f64,
    },
    /// Entry `index` ended too early; its end moved forward to the next start
    GapFilled {
        index: usize,
        from: f64,
        to: f64,
    },
}

/// Applies a [`TimelinePolicy`] to an ordered track
#[derive(Debug, Clone, Copy)]
pub struct TimelineRepair {
    tolerance: f64,
}

impl Default for TimelineRepair {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE_SECS)
    }
}

impl TimelineRepair {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Apply `policy` to `entries` in place.
    ///
    /// On error the entries are left untouched.
    pub fn apply(&self, policy: TimelinePolicy, entries: &mut [SubtitleEntry]) -> Result<Vec<TimelineAdjustment>, TimelineError> {
        match policy {
            TimelinePolicy::None => Ok(Vec::new()),
            TimelinePolicy::RemoveGap => {
                let mut ranges: Vec<TimeRange> = entries.iter().map(|e| e.time_range).collect();
                let indices: Vec<usize> = entries.iter().map(|e| e.index).collect();

                let adjustments = self.remove_gaps_indexed(&mut ranges, &indices)?;

                for (entry, range) in entries.iter_mut().zip(ranges) {
                    entry.time_range = range;
                }
                Ok(adjustments)
            }
        }
    }

    /// Run the gap removal over a bare list of ranges, numbered from 1.
    pub fn remove_gaps(&self, ranges: &mut [TimeRange]) -> Result<Vec<TimelineAdjustment>, TimelineError> {
        let indices: Vec<usize> = (1..=ranges.len()).collect();
        self.remove_gaps_indexed(ranges, &indices)
    }

    fn remove_gaps_indexed(&self, ranges: &mut [TimeRange], indices: &[usize]) -> Result<Vec<TimelineAdjustment>, TimelineError> {
        for (range, &index) in ranges.iter().zip(indices) {
            debug!("Parse time start: {} -> end: {}", range.start, range.end);
            if range.start > range.end {
                return Err(TimelineError::InvertedRange {
                    index,
                    start: range.start,
                    end: range.end,
                });
            }
        }

        let tolerance = self.tolerance;
        let mut adjustments = Vec::new();

        for i in 0..ranges.len().saturating_sub(1) {
            let end = ranges[i].end;
            let next = ranges[i + 1];

            if end > next.start {
                if end + tolerance < next.end {
                    let shifted = end + tolerance;
                    warn!(
                        "Inconsistency detected at entry {}, fixed locally by shifting start {} to {}",
                        indices[i + 1], next.start, shifted
                    );
                    ranges[i + 1].start = shifted;
                    adjustments.push(TimelineAdjustment::OverlapShifted {
                        index: indices[i + 1],
                        from: next.start,
                        to: shifted,
                    });
                } else {
                    return Err(TimelineError::UnresolvableOverlap {
                        index: indices[i],
                        next_index: indices[i + 1],
                        end,
                        next_start: next.start,
                        next_end: next.end,
                        tolerance,
                    });
                }
            } else if end < next.start - tolerance {
                debug!("Fill the gap {} to {}", end, next.start);
                ranges[i].end = next.start;
                adjustments.push(TimelineAdjustment::GapFilled {
                    index: indices[i],
                    from: end,
                    to: next.start,
                });
            }
        }

        Ok(adjustments)
    }
}
