/*!
 * Tests for application configuration
 */

use anyhow::Result;
use srtconv::app_config::{Config, LogLevel};
use srtconv::emitters::OutputMode;
use srtconv::timeline::TimelinePolicy;
use crate::common;

#[test]
fn test_default_shouldMatchLegacyDefaults() {
    let config = Config::default();

    assert_eq!(config.output_mode, OutputMode::Text);
    assert_eq!(config.timeline_policy, TimelinePolicy::None);
    assert_eq!(config.tolerance_secs, 0.02);
    assert_eq!(config.log_level, LogLevel::Warn);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_withNegativeTolerance_shouldFail() {
    let config = Config { tolerance_secs: -0.01, ..Config::default() };
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withHugeOrNanTolerance_shouldFail() {
    assert!(Config { tolerance_secs: 1.0, ..Config::default() }.validate().is_err());
    assert!(Config { tolerance_secs: f64::NAN, ..Config::default() }.validate().is_err());
    assert!(Config { tolerance_secs: 0.0, ..Config::default() }.validate().is_ok());
}

#[test]
fn test_fromFile_withPartialJson_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{ "output_mode": "srtcatline", "timeline_policy": "rm_gap" }"#,
    )?;

    let config = Config::from_file(&path)?;
    assert_eq!(config.output_mode, OutputMode::Concatenated);
    assert_eq!(config.timeline_policy, TimelinePolicy::RemoveGap);
    assert_eq!(config.tolerance_secs, 0.02);
    Ok(())
}

#[test]
fn test_fromFile_withMissingFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    assert!(Config::from_file(temp_dir.path().join("missing.json")).is_err());
    Ok(())
}

#[test]
fn test_serialize_shouldRoundTripThroughJson() -> Result<()> {
    let config = Config {
        output_mode: OutputMode::Raw,
        timeline_policy: TimelinePolicy::RemoveGap,
        tolerance_secs: 0.05,
        log_level: LogLevel::Debug,
    };
    let json = serde_json::to_string_pretty(&config)?;
    assert!(json.contains("\"remove_gap\""));

    let back: Config = serde_json::from_str(&json)?;
    assert_eq!(back, config);
    Ok(())
}

#[test]
fn test_logLevel_toLevelFilter_shouldMapEachLevel() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
