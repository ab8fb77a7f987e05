/*!
 * Tests for error types and conversions
 */

use srtconv::errors::{
    EmptyInputError, FormatError, ParseError, ParseErrorKind, SubtitleError, TimelineError,
};

#[test]
fn test_formatError_shouldDisplayOffendingText() {
    let error = FormatError::new("12:3:45,000");
    assert!(error.to_string().contains("12:3:45,000"));
}

#[test]
fn test_parseError_indexMismatch_shouldDisplayLineExpectedAndFound() {
    let error = ParseError {
        line: 17,
        kind: ParseErrorKind::IndexMismatch { expected: 3, found: 5 },
    };
    let display = error.to_string();
    assert!(display.contains("line 17"));
    assert!(display.contains("expected 3"));
    assert!(display.contains("found 5"));
}

#[test]
fn test_timelineError_unresolvableOverlap_shouldDisplayIndicesAndTimes() {
    let error = TimelineError::UnresolvableOverlap {
        index: 4,
        next_index: 5,
        end: 10.0,
        next_start: 1.0,
        next_end: 1.01,
        tolerance: 0.02,
    };
    let display = error.to_string();
    assert!(display.contains("entries 4 and 5"));
    assert!(display.contains("1.01"));
    assert!(display.contains("0.02"));
}

#[test]
fn test_subtitleError_fromEachKind_shouldBeTransparent() {
    let error: SubtitleError = EmptyInputError.into();
    assert_eq!(error.to_string(), EmptyInputError.to_string());

    let error: SubtitleError = FormatError::new("x").into();
    assert!(matches!(error, SubtitleError::Format(_)));
}

#[test]
fn test_parseError_malformedTimeLine_shouldIncludeTimecodeDetail() {
    let error = ParseError {
        line: 2,
        kind: ParseErrorKind::MalformedTimeLine {
            line: "00:00:01,000 --> 00:61:00,000".to_string(),
            timecode: Some(FormatError::new("00:61:00,000")),
        },
    };
    let display = error.to_string();
    assert!(display.contains("line 2"));
    assert!(display.contains("Malformed timecode: '00:61:00,000'"));

    let error = ParseError {
        line: 2,
        kind: ParseErrorKind::MalformedTimeLine { line: "no arrow".to_string(), timecode: None },
    };
    assert!(error.to_string().ends_with("malformed time line 'no arrow'"));
}
