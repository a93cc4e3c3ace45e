/*!
 * Tests for cue timing and SRT rendering
 */

use anyhow::Result;
use txt2srt::subtitle_processor::{format_srt, format_timestamp, Cue, CueSheet};
use crate::common;

/// Documented timestamp examples
#[test]
fn test_format_timestamp_withKnownValues_shouldMatchSrtFormat() {
    assert_eq!(format_timestamp(0.0), "00:00:00,000");
    assert_eq!(format_timestamp(330.0), "00:05:30,000");
    assert_eq!(format_timestamp(3661.5), "01:01:01,500");
}

/// Fractions are truncated, not rounded
#[test]
fn test_format_timestamp_withRepeatingFraction_shouldTruncate() {
    assert_eq!(format_timestamp(2.0 / 3.0), "00:00:00,666");
    assert_eq!(format_timestamp(330.0 / 7.0), "00:00:47,142");
}

/// Hours keep growing past a day
#[test]
fn test_format_timestamp_withManyHours_shouldNotWrap() {
    assert_eq!(format_timestamp(100.0 * 3600.0 + 1.25), "100:00:01,250");
}

/// Cue accessors format start and end
#[test]
fn test_cue_properties_withValidCue_shouldFormatTimes() {
    let cue = Cue::new(7, 61.25, 65.5, "Hello\nWorld".to_string());
    assert_eq!(cue.index, 7);
    assert_eq!(cue.format_start_time(), "00:01:01,250");
    assert_eq!(cue.format_end_time(), "00:01:05,500");
    assert_eq!(cue.text, "Hello\nWorld");
}

/// Two lines over ten seconds
#[test]
fn test_format_srt_withHelloWorld_shouldProduceTwoCues() {
    let output = format_srt(&["Hello", "World"], 10.0);
    let expected = "1\n00:00:00,000 --> 00:00:05,000\nHello\n\n2\n00:00:05,000 --> 00:00:10,000\nWorld\n";
    assert_eq!(output, expected);
}

/// No lines means no output and no division by zero
#[test]
fn test_format_srt_withNoLines_shouldBeEmptyString() {
    let lines: Vec<String> = Vec::new();
    assert_eq!(format_srt(&lines, 330.0), "");
    assert_eq!(format_srt(&lines, 0.0), "");
}

/// Starts are multiples of the slot and ends are shifted by one slot
#[test]
fn test_from_lines_withSeveralLines_shouldPartitionDuration() {
    let lines = ["a", "b", "c", "d", "e", "f", "g"];
    let total = 330.0;
    let sheet = CueSheet::from_lines(&lines, total);
    let slot = total / lines.len() as f64;

    assert_eq!(sheet.len(), lines.len());
    assert_eq!(sheet.total_seconds, total);

    for (i, cue) in sheet.cues.iter().enumerate() {
        assert_eq!(cue.index, i + 1);
        assert_eq!(cue.start_seconds, slot * i as f64);
        assert_eq!(cue.end_seconds, slot * (i + 1) as f64);
        assert_eq!(cue.text, lines[i]);
    }

    assert_eq!(sheet.cues[0].start_seconds, 0.0);
    let last_end = sheet.cues.last().unwrap().end_seconds;
    assert!((last_end - total).abs() < 1e-9);
}

/// Each cue ends exactly where the next begins
#[test]
fn test_from_lines_withConsecutiveCues_shouldBeContiguous() {
    for count in 1..=25 {
        let lines: Vec<String> = (0..count).map(|i| format!("line {}", i)).collect();
        let sheet = CueSheet::from_lines(&lines, 97.0);

        for pair in sheet.cues.windows(2) {
            assert_eq!(pair[0].end_seconds, pair[1].start_seconds);
            assert!(pair[0].start_seconds < pair[0].end_seconds);
        }
    }
}

/// Zero duration yields zero-length cues rather than NaN
#[test]
fn test_from_lines_withZeroDuration_shouldUseZeroTimestamps() {
    let output = format_srt(&["only"], 0.0);
    assert_eq!(output, "1\n00:00:00,000 --> 00:00:00,000\nonly\n");
}

/// Rendered timestamps are non-decreasing and start at zero
#[test]
fn test_render_withManyLines_shouldHaveOrderedTimestamps() {
    let lines: Vec<String> = (0..13).map(|i| format!("Line {}", i)).collect();
    let output = format_srt(&lines, 200.0);
    let ranges = common::parse_time_ranges(&output);

    assert_eq!(ranges.len(), 13);
    assert_eq!(ranges[0].0, 0.0);
    for pair in ranges.windows(2) {
        assert!(pair[0].1 <= pair[1].0 + 1e-9);
        assert!(pair[0].0 <= pair[1].0);
    }
    assert!((ranges[12].1 - 200.0).abs() < 0.002);
}

/// Original line content, including padding, lands in the output
#[test]
fn test_render_withPaddedLine_shouldKeepOriginalText() {
    let output = format_srt(&["  padded  "], 4.0);
    assert!(output.ends_with("\n  padded  \n"));
}

/// Writing the sheet produces exactly the rendered text
#[tokio::test]
async fn test_write_to_srt_withValidSheet_shouldWriteRenderedText() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("nested").join("out.srt");

    let sheet = CueSheet::from_lines(&["One", "Two", "Three"], 9.0);
    sheet.write_to_srt(&path).await?;

    let written = std::fs::read_to_string(&path)?;
    assert_eq!(written, sheet.render());
    assert_eq!(written, sheet.to_string());
    assert!(written.starts_with("1\n00:00:00,000 --> 00:00:03,000\nOne\n\n2\n"));

    Ok(())
}
