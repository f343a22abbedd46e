//! Timestamp parsing and formatting.
//!
//! Cue timestamps use the subtitle clock format `HH:MM:SS` or
//! `HH:MM:SS,mmm`. Playback positions are plain seconds (`f64`).

use crate::error::TimestampError;

/// Convert a cue timestamp into seconds.
///
/// The text is split on `:` and `,` into up to four fields
/// `[hours, minutes, seconds, milliseconds]`. A missing or non-numeric
/// field counts as zero, so this never fails: malformed input degrades
/// to a partial value.
///
/// # Arguments
/// * `text` - Timestamp such as `"00:01:30,500"` or `"00:01:30"`
///
/// # Returns
/// Total seconds, never negative
pub fn parse_timestamp(text: &str) -> f64 {
    let mut fields = text.split([':', ',']).map(leading_number);

    let hours = fields.next().unwrap_or(0.0);
    let minutes = fields.next().unwrap_or(0.0);
    let seconds = fields.next().unwrap_or(0.0);
    let milliseconds = fields.next().unwrap_or(0.0);

    hours * 3600.0 + minutes * 60.0 + seconds + milliseconds / 1000.0
}

/// Value of the leading digit run of a field, or 0 if there is none.
///
/// Anything after the digits is ignored (`"30abc"` is 30, `"1.5"` is 1).
fn leading_number(field: &str) -> f64 {
    let field = field.trim_start();
    let end = field
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(field.len());
    field[..end].parse().unwrap_or(0.0)
}

/// Strictly parse a cue timestamp.
///
/// Accepts exactly `HH:MM:SS` or `HH:MM:SS,mmm` with all-digit fields,
/// minutes and seconds below 60 and at most three millisecond digits.
pub fn try_parse_timestamp(text: &str) -> Result<f64, TimestampError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TimestampError::Empty);
    }

    let (clock, millis) = match text.split_once(',') {
        Some((clock, millis)) => (clock, Some(millis)),
        None => (text, None),
    };

    let fields: Vec<&str> = clock.split(':').collect();
    if fields.len() != 3 {
        return Err(TimestampError::WrongFieldCount {
            text: text.to_string(),
            found: fields.len() + usize::from(millis.is_some()),
        });
    }

    let hours = strict_field(fields[0])?;
    let minutes = bounded_field(fields[1], "minutes", 60)?;
    let seconds = bounded_field(fields[2], "seconds", 60)?;
    let milliseconds = match millis {
        Some(field) => {
            let value = strict_field(field)?;
            if field.len() > 3 {
                return Err(TimestampError::OutOfRange {
                    name: "milliseconds",
                    value,
                });
            }
            value
        }
        None => 0,
    };

    Ok(hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds as f64 + milliseconds as f64 / 1000.0)
}

fn strict_field(field: &str) -> Result<u64, TimestampError> {
    let not_a_number = || TimestampError::NotANumber {
        field: field.to_string(),
    };

    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_a_number());
    }
    field.parse().map_err(|_| not_a_number())
}

fn bounded_field(field: &str, name: &'static str, limit: u64) -> Result<u64, TimestampError> {
    let value = strict_field(field)?;
    if value >= limit {
        return Err(TimestampError::OutOfRange { name, value });
    }
    Ok(value)
}

/// Format seconds as a cue timestamp.
///
/// Hours, minutes and seconds are zero-padded to two digits (hours grow
/// wider past 99). With `include_milliseconds` the value is rounded to the
/// nearest millisecond and appended after a comma, three digits wide; a
/// fraction that rounds up to a full second carries into the seconds field.
/// Without it, the fractional part is truncated.
///
/// Negative, NaN and infinite values format as zero.
///
/// # Arguments
/// * `total_seconds` - Playback position in seconds
/// * `include_milliseconds` - Whether to append the `,mmm` part
pub fn format_seconds(total_seconds: f64, include_milliseconds: bool) -> String {
    let total = if total_seconds.is_finite() && total_seconds > 0.0 {
        total_seconds
    } else {
        0.0
    };

    if include_milliseconds {
        let total_ms = (total * 1000.0).round() as u64;
        format!("{},{:03}", format_clock(total_ms / 1000), total_ms % 1000)
    } else {
        format_clock(total.floor() as u64)
    }
}

fn format_clock(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
