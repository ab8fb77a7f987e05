use anyhow::{Result, Context};
use log::{info, debug};
use std::path::Path;

use crate::app_config::Config;
use crate::emitters::OutputMode;
use crate::errors::SubtitleError;
use crate::file_utils::FileManager;
use crate::subtitle_processor::{SubtitleCollection, SubtitleEntry};
use crate::timeline::{TimelineAdjustment, TimelineRepair};
use crate::transcript;

// @module: Application controller for subtitle conversion

/// What a finished run did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// Entries written
    pub entries: usize,
    /// Overlaps repaired by shifting a start time
    pub overlaps_fixed: usize,
    /// Gaps closed by extending an end time
    pub gaps_filled: usize,
}

/// Runs one conversion: read, parse, repair, render, write
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    /// Convert subtitle text in memory according to the configuration
    pub fn convert_str(&self, content: &str) -> Result<(String, RunSummary), SubtitleError> {
        let entries = SubtitleCollection::parse_srt_string(content)?;
        self.convert_entries(entries)
    }

    // Repair and render an already parsed track
    fn convert_entries(&self, mut entries: Vec<SubtitleEntry>) -> Result<(String, RunSummary), SubtitleError> {
        let repair = TimelineRepair::new(self.config.tolerance_secs);
        let adjustments = repair.apply(self.config.timeline_policy, &mut entries)?;

        let output = self.config.output_mode.render(&entries)?;

        let summary = RunSummary {
            entries: entries.len(),
            overlaps_fixed: adjustments.iter()
                .filter(|a| matches!(a, TimelineAdjustment::OverlapShifted { .. }))
                .count(),
            gaps_filled: adjustments.iter()
                .filter(|a| matches!(a, TimelineAdjustment::GapFilled { .. }))
                .count(),
        };

        Ok((output, summary))
    }

    /// Convert `input_file` into `output_file`.
    ///
    /// The output file is only created once the whole result is rendered.
    pub fn run<P1: AsRef<Path>, P2: AsRef<Path>>(&self, input_file: P1, output_file: P2) -> Result<RunSummary> {
        let input_file = input_file.as_ref();
        let output_file = output_file.as_ref();

        debug!("infile: {}", input_file.display());
        debug!("outfile: {}", output_file.display());
        debug!("outtype: {}", self.config.output_mode);
        debug!("timeline: {}", self.config.timeline_policy);
        debug!("tolerance: {}", self.config.tolerance_secs);

        let collection = SubtitleCollection::from_file(input_file)?;
        debug!("Read {} entries from {}", collection.len(), collection.source_file.display());

        let (output, summary) = self.convert_entries(collection.entries)
            .with_context(|| format!("Failed to convert {}", input_file.display()))?;

        FileManager::write_atomic(output_file, &output)?;

        info!(
            "Wrote {} entries to {} ({} overlaps fixed, {} gaps filled)",
            summary.entries, output_file.display(), summary.overlaps_fixed, summary.gaps_filled
        );
        Ok(summary)
    }

    /// Convert a `M:SS text` transcript file into a subtitle track
    pub fn run_transcript<P1: AsRef<Path>, P2: AsRef<Path>>(&self, input_file: P1, output_file: P2) -> Result<RunSummary> {
        let input_file = input_file.as_ref();
        let output_file = output_file.as_ref();

        let content = FileManager::read_to_string(input_file)?;
        let (entries, output) = Self::transcript_to_srt(&content)
            .with_context(|| format!("Failed to convert transcript {}", input_file.display()))?;

        FileManager::write_atomic(output_file, &output)?;

        info!("Wrote {} entries to {}", entries, output_file.display());
        Ok(RunSummary { entries, ..RunSummary::default() })
    }

    /// Render transcript text as a subtitle track, returning the entry count and text
    pub fn transcript_to_srt(content: &str) -> Result<(usize, String), SubtitleError> {
        let entries = transcript::parse_transcript(content)?;
        let output = OutputMode::Concatenated.render(&entries)?;
        Ok((entries.len(), output))
    }
}
