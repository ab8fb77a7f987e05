/*!
 * Tests for timecode conversion
 */

use srtconv::timecode::{format_timecode, parse_timecode, TimeRange};

#[test]
fn test_parseTimecode_withValidTimecode_shouldConvertToSeconds() {
    let secs = parse_timecode("00:02:33,974").unwrap();
    assert!((secs - 153.974).abs() < 1e-9);
}

#[test]
fn test_formatTimecode_withParsedValue_shouldReproduceInput() {
    for text in ["00:00:01,310", "00:00:05,490", "00:00:05,640", "01:23:45,678", "23:59:59,999"] {
        let secs = parse_timecode(text).unwrap();
        assert_eq!(format_timecode(secs), text);
    }
}

#[test]
fn test_formatTimecode_withEveryMillisecond_shouldRoundTrip() {
    for ms in 0..3000u32 {
        let text = format!("00:00:{:02},{:03}", ms / 1000, ms % 1000);
        assert_eq!(format_timecode(parse_timecode(&text).unwrap()), text);
    }
}

#[test]
fn test_parseTimecode_withMalformedText_shouldReturnFormatError() {
    let err = parse_timecode("0:00:01,000").unwrap_err();
    assert_eq!(err.text, "0:00:01,000");
    assert!(err.to_string().contains("0:00:01,000"));
}

#[test]
fn test_formatTimecode_withLargeHours_shouldZeroPad() {
    assert_eq!(format_timecode(3600.0 * 7.0 + 0.007), "07:00:00,007");
}

#[test]
fn test_timeRange_parseLine_withValidLine_shouldParseBothEnds() {
    let range = TimeRange::parse_line("00:00:01,310 --> 00:00:05,490").unwrap().unwrap();
    assert!((range.start - 1.31).abs() < 1e-9);
    assert!((range.end - 5.49).abs() < 1e-9);
    assert_eq!(range.to_string(), "00:00:01,310 --> 00:00:05,490");
}
