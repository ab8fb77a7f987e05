use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::emitters::OutputMode;
use crate::timeline::{TimelinePolicy, DEFAULT_TOLERANCE_SECS};

/// Application configuration module
/// Built once at startup from defaults, an optional JSON file and command
/// line overrides, validated, then passed down by reference.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Output shape
    #[serde(default)]
    pub output_mode: OutputMode,

    /// Timeline normalization applied before output
    #[serde(default)]
    pub timeline_policy: TimelinePolicy,

    /// Gap/overlap in seconds treated as "touching"
    #[serde(default = "default_tolerance_secs")]
    pub tolerance_secs: f64,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Upper bound for `tolerance_secs`; anything larger would swallow real pauses
const MAX_TOLERANCE_SECS: f64 = 1.0;

fn default_tolerance_secs() -> f64 {
    DEFAULT_TOLERANCE_SECS
}

impl Config {
    /// Load a configuration file. Missing fields fall back to defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance_secs.is_finite() || self.tolerance_secs < 0.0 {
            return Err(anyhow!("Tolerance must be a non-negative number of seconds, got {}", self.tolerance_secs));
        }

        if self.tolerance_secs >= MAX_TOLERANCE_SECS {
            return Err(anyhow!(
                "Tolerance of {}s is too large (must be below {}s)",
                self.tolerance_secs, MAX_TOLERANCE_SECS
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            output_mode: OutputMode::default(),
            timeline_policy: TimelinePolicy::default(),
            tolerance_secs: default_tolerance_secs(),
            log_level: LogLevel::default(),
        }
    }
}
