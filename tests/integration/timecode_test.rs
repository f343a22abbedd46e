//! Integration tests for timestamp parsing and formatting

use cuesync::{format_seconds, parse_timestamp, try_parse_timestamp, TimestampError};

#[test]
fn documented_examples() {
    assert_eq!(parse_timestamp("00:01:30,500"), 90.5);
    assert_eq!(parse_timestamp("00:01:30"), 90.0);
    assert_eq!(format_seconds(90.5, true), "00:01:30,500");
    assert_eq!(format_seconds(90.0, false), "00:01:30");
}

#[test]
fn lenient_and_strict_agree_on_valid_input() {
    for text in ["00:00:00", "00:00:43,547", "01:59:59,999", "23:00:00,001"] {
        let strict = try_parse_timestamp(text).unwrap();
        assert!((strict - parse_timestamp(text)).abs() < 1e-9, "{text}");
    }
}

#[test]
fn lenient_accepts_what_strict_rejects() {
    for text in ["", "1:30", "00:61:00", "x:y:z", "00:00:10,5000"] {
        assert!(try_parse_timestamp(text).is_err(), "{text}");
        assert!(parse_timestamp(text) >= 0.0, "{text}");
    }
    assert_eq!(try_parse_timestamp(""), Err(TimestampError::Empty));
}

#[test]
fn formatted_value_parses_back() {
    let mut seconds = 0.0;
    while seconds < 7200.0 {
        let text = format_seconds(seconds, true);
        let back = try_parse_timestamp(&text).unwrap();
        assert!((back - seconds).abs() <= 0.001, "{seconds} -> {text} -> {back}");
        seconds += 123.4567;
    }
}
