/*!
 * Integration tests for transcript import
 */

use std::fs;
use anyhow::Result;

use srtconv::app_config::Config;
use srtconv::emitters::OutputMode;
use srtconv::timeline::TimelinePolicy;
use srtconv::Controller;
use crate::common;

/// A transcript becomes a track that the converter accepts
#[test]
fn test_runTranscript_thenConvert_shouldRoundTripText() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "talk.txt", "0:00 hello\n0:02 there\n\n0:10 bye\n")?;
    let srt = temp_dir.path().join("talk.srt");
    let txt = temp_dir.path().join("talk.out.txt");

    let summary = Controller::with_config(Config::default())?.run_transcript(&input, &srt)?;
    assert_eq!(summary.entries, 3);

    let converter = Controller::with_config(Config {
        output_mode: OutputMode::Text,
        timeline_policy: TimelinePolicy::RemoveGap,
        ..Config::default()
    })?;
    converter.run(&srt, &txt)?;

    assert_eq!(fs::read_to_string(&txt)?, "hello\n\nthere\n\nbye\n\n");
    Ok(())
}

/// Malformed transcript lines abort without output
#[test]
fn test_runTranscript_withMalformedLine_shouldNotCreateOutput() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "talk.txt", "0:00 hello\nbroken\n")?;
    let srt = temp_dir.path().join("talk.srt");

    let err = Controller::with_config(Config::default())?.run_transcript(&input, &srt).unwrap_err();

    assert!(format!("{:#}", err).contains("line 2"));
    assert!(!srt.exists());
    Ok(())
}
