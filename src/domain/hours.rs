//! Conversions between free-text durations and decimal hours.
//!
//! Users type durations such as `2h30m`, `2h` or `45m`. Stored entries keep
//! decimal hours rounded up to a quarter hour, and are displayed again in the
//! `2h30m` notation.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Largest hour component accepted by [`parse_time_input`].
pub const MAX_HOURS: u32 = 24;
/// Largest minute component accepted by [`parse_time_input`].
pub const MAX_MINUTES: u32 = 59;
/// Granularity of stored entry durations.
pub const QUARTER_HOUR_MINUTES: u32 = 15;

static TIME_INPUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:([0-9]+)h)?(?:([0-9]+)m)?$").expect("time input pattern is valid")
});

/// Reasons a time string is not (yet) a valid entry duration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeInputError {
    #[error("time value is empty")]
    Empty,
    #[error("`{0}` is not a valid time, use e.g. 2h30m, 2h or 45m")]
    Format(String),
    #[error("hours must be at most {}", MAX_HOURS)]
    HoursOutOfRange,
    #[error("minutes must be at most {}", MAX_MINUTES)]
    MinutesOutOfRange,
    #[error("time value must be greater than zero")]
    Zero,
}

/// Successfully parsed duration. No rounding has been applied yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTime {
    /// The text as typed by the user.
    pub input: String,
    /// Decimal hours, `N + M/60`.
    pub hours: f64,
    /// Same duration in whole minutes.
    pub total_minutes: u32,
}

fn component(
    capture: Option<regex::Match<'_>>,
    max: u32,
    err: TimeInputError,
) -> Result<u32, TimeInputError> {
    let Some(capture) = capture else {
        return Ok(0);
    };
    // Digit runs too long for u32 are out of range as well.
    match capture.as_str().parse::<u32>() {
        Ok(value) if value <= max => Ok(value),
        _ => Err(err),
    }
}

/// Parses `<N>h<M>m`, `<N>h` or `<M>m`, ignoring case and whitespace.
///
/// A bare number is rejected: it is ambiguous between hours and minutes.
pub fn parse_time_input(input: &str) -> Result<ParsedTime, TimeInputError> {
    let normalized: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    if normalized.is_empty() {
        return Err(TimeInputError::Empty);
    }

    let captures = TIME_INPUT
        .captures(&normalized)
        .filter(|c| c.get(1).is_some() || c.get(2).is_some())
        .ok_or_else(|| TimeInputError::Format(input.trim().to_string()))?;

    let hours = component(captures.get(1), MAX_HOURS, TimeInputError::HoursOutOfRange)?;
    let minutes = component(
        captures.get(2),
        MAX_MINUTES,
        TimeInputError::MinutesOutOfRange,
    )?;
    if hours == 0 && minutes == 0 {
        return Err(TimeInputError::Zero);
    }

    Ok(ParsedTime {
        input: input.to_string(),
        hours: f64::from(hours) + f64::from(minutes) / 60.0,
        total_minutes: hours * 60 + minutes,
    })
}

/// Rounds decimal hours up to the next multiple of a quarter hour.
///
/// Negative and non-finite values are treated as zero.
pub fn round_to_quarter_hour(hours: f64) -> f64 {
    if !hours.is_finite() || hours <= 0.0 {
        return 0.0;
    }
    // Strip float noise (0.1 * 3 and friends) before the ceiling.
    let minutes = (hours * 60.0 * 1_000_000.0).round() / 1_000_000.0;
    let quarter = f64::from(QUARTER_HOUR_MINUTES);
    (minutes / quarter).ceil() * quarter / 60.0
}

/// Renders decimal hours as `2h30m`, `2h`, `30m` or `0h`.
pub fn format_hours(hours: f64) -> String {
    let total_minutes = if hours.is_finite() && hours > 0.0 {
        (hours * 60.0).round() as u64
    } else {
        0
    };
    match (total_minutes / 60, total_minutes % 60) {
        (0, 0) => "0h".to_string(),
        (h, 0) => format!("{h}h"),
        (0, m) => format!("{m}m"),
        (h, m) => format!("{h}h{m}m"),
    }
}
