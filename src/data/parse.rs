//! Lenient parsing of pasted PSA logs
//!
//! Input is free text, typically pasted straight out of a lab portal: one
//! measurement per line, with dates in whatever format the portal emitted.
//! Parsing is lenient by design; a line that cannot be understood is dropped
//! silently rather than reported as an error.
//!
//! Date disambiguation, in priority order:
//!
//! 1. `YYYY-MM-DD` parses directly.
//! 2. Three numeric parts separated by `/`, `-`, or `.`:
//!    - first part > 31 ⇒ `YEAR/MONTH/DAY`
//!    - a 2-digit third part is a 2-digit year, expanded as `2000 + part`
//!    - first part > 12 ⇒ `DAY/MONTH/YEAR` (it cannot be a month)
//!    - otherwise ⇒ `MONTH/DAY/YEAR` (US convention; the fully ambiguous
//!      case is guesswork and this default is deliberate)
//! 3. Anything else is not a date.
//!
//! Month names are not supported.

use chrono::NaiveDate;

use super::measurement::{Measurement, MeasurementSeries};

// ============================================================================
// Date token parsing
// ============================================================================

/// Try to interpret a single text token as a calendar date
///
/// Returns `None` for anything that is not a date under the rules above,
/// including real-looking dates that do not exist on the calendar
/// ("02/31/2024" is rejected, never rolled over into March).
pub fn parse_date_token(token: &str) -> Option<NaiveDate> {
    let token = token.trim();

    // ISO fast path: YYYY-MM-DD
    if let Some(date) = parse_iso(token) {
        return Some(date);
    }

    let (p1, p2, p3) = split_three(token)?;
    let v1 = parse_digits(p1, 1, 4)?;
    let v2 = parse_digits(p2, 1, 2)?;
    let v3 = parse_digits(p3, 2, 4)?;

    let (year, month, day) = if v1 > 31 {
        (v1, v2, v3)
    } else {
        let year = if p3.len() == 2 { 2000 + v3 } else { v3 };
        if v1 > 12 {
            (year, v2, v1)
        } else {
            (year, v1, v2)
        }
    };

    make_date(year, month, day)
}

fn parse_iso(token: &str) -> Option<NaiveDate> {
    let (y, rest) = token.split_once('-')?;
    let (m, d) = rest.split_once('-')?;
    let year = parse_digits(y, 4, 4)?;
    let month = parse_digits(m, 2, 2)?;
    let day = parse_digits(d, 2, 2)?;
    make_date(year, month, day)
}

/// Split into exactly three parts on `/`, `-`, or `.` (separators may differ)
fn split_three(token: &str) -> Option<(&str, &str, &str)> {
    let mut parts = token.split(['/', '-', '.']);
    let first = parts.next()?;
    let second = parts.next()?;
    let third = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((first, second, third))
}

/// Parse an all-digit part whose length lies in `[min, max]`
fn parse_digits(part: &str, min: usize, max: usize) -> Option<u32> {
    if part.len() < min || part.len() > max || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Validate the resolved fields and build the date
///
/// `NaiveDate::from_ymd_opt` rejects non-existent dates outright, so an
/// overflowing day-of-month can never roll into the next month.
fn make_date(year: u32, month: u32, day: u32) -> Option<NaiveDate> {
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) || !(1900..=2100).contains(&year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year as i32, month, day)
}

// ============================================================================
// Line and block parsing
// ============================================================================

/// Parse one line of raw text into a measurement, or `None`
///
/// Blank lines and `#` comments yield `None`. The line is tokenized on runs
/// of whitespace, commas, semicolons, and pipes; tokens equal to the literal
/// word "PSA" (any case) are discarded. The first token that parses as a
/// date becomes the date (later tokens are not re-tested), and the first
/// remaining token that parses as a non-negative finite number becomes the
/// value. A line missing either is skipped, not an error.
pub fn parse_line(line: &str) -> Option<Measurement> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let tokens = line
        .split(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | '|'))
        .filter(|t| !t.is_empty());

    let mut date: Option<NaiveDate> = None;
    let mut value: Option<f64> = None;

    for token in tokens {
        if token.eq_ignore_ascii_case("psa") {
            continue;
        }

        if date.is_none() {
            if let Some(d) = parse_date_token(token) {
                date = Some(d);
                continue;
            }
        }

        if value.is_none() {
            if let Ok(v) = token.parse::<f64>() {
                if v.is_finite() && v >= 0.0 {
                    value = Some(v);
                }
            }
        }
    }

    Some(Measurement::new(date?, value?))
}

/// Parse a whole block of text into a chronologically ordered series
///
/// Never fails; unparsable lines are dropped. Deterministic: the same text
/// always yields the same ordered series.
pub fn parse_measurements(text: &str) -> MeasurementSeries {
    MeasurementSeries::from_unsorted(text.lines().filter_map(parse_line).collect())
}
