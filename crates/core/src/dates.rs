//! Date string normalization.
//!
//! Converts human-entered dates into the canonical `YYYY-mm-dd HH[:MM[:SS]]`
//! form. Two date spellings are accepted, ISO (`2020-09-25`) and day-first
//! (`25.09.2020`); a missing or malformed time-of-day falls back to `12:00`.
//! This is a textual transform only: no locale, timezone, or calendar
//! validity handling.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Error raised when a date string matches neither accepted spelling.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("invalid date '{date}'")]
    InvalidDate { date: String },
}

/// Fallback time-of-day used when the time portion is absent or malformed.
pub const DEFAULT_TIME: &str = "12:00";

static DAY_FIRST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})\.(\d{2})\.(\d{4})$").expect("valid regex"));

static ISO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

static TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}(:\d{2}(:\d{2})?)?$").expect("valid regex"));

/// Normalize a free-form date(+optional time) string.
///
/// With `allow_empty`, an absent or empty input yields `Ok(None)` ("no value
/// set"). Otherwise the input is split on the first space into a date part
/// and a time remainder: the date part must be `DD.MM.YYYY` (reordered to
/// `YYYY-MM-DD`; calendar validity is not checked) or `YYYY-MM-DD` (kept as
/// is), and the time remainder is kept verbatim when it matches `HH`,
/// `HH:MM`, or `HH:MM:SS`, else replaced with [`DEFAULT_TIME`].
///
/// # Errors
///
/// Returns [`DateError::InvalidDate`] when the date part matches neither
/// accepted spelling; no partial result is produced.
pub fn normalize(raw: Option<&str>, allow_empty: bool) -> Result<Option<String>, DateError> {
    let src = match raw {
        Some(s) if !s.is_empty() => s,
        _ if allow_empty => return Ok(None),
        Some(s) => s,
        None => return Err(DateError::InvalidDate { date: String::new() }),
    };

    let (date_part, time_part) = match src.split_once(' ') {
        Some((d, t)) => (d, t),
        None => (src, ""),
    };

    let date = if let Some(caps) = DAY_FIRST.captures(date_part) {
        // DD.MM.YYYY reordered to YYYY-MM-DD by moving the numeric groups.
        format!("{}-{}-{}", &caps[3], &caps[2], &caps[1])
    } else if ISO.is_match(date_part) {
        date_part.to_string()
    } else {
        return Err(DateError::InvalidDate { date: date_part.to_string() });
    };

    let time = if TIME.is_match(time_part) { time_part } else { DEFAULT_TIME };
    Ok(Some(format!("{date} {time}")))
}
