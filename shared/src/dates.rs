//! Canonical `dd.mm.yyyy` date handling.
//!
//! Dates arrive in whatever form the backend or a calendar control produces.
//! They are normalized to the canonical form for display, and only the
//! canonical form passes the submission gate.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::OnceLock;

/// chrono format string of the canonical display form
pub const CANONICAL_FORMAT: &str = "%d.%m.%Y";

const ISO_FORMAT: &str = "%Y-%m-%d";

static CANONICAL_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Submission gate: exactly two digits, two digits, four digits, dot separated.
/// Only ASCII digits count.
///
/// This is a shape check only, no calendar validation happens here.
pub fn is_canonical(date: &str) -> bool {
    CANONICAL_PATTERN
        .get_or_init(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("hardcoded regex should be valid"))
        .is_match(date)
}

/// Parse a date in any of the forms the backend or browser hand us
pub fn parse_flexible(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, CANONICAL_FORMAT) {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, ISO_FORMAT) {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Some(datetime.date_naive());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(datetime.date());
    }
    // Browsers hand out US-style dates from some locales
    NaiveDate::parse_from_str(input, "%m/%d/%Y").ok()
}

/// Normalize to `dd.mm.yyyy`; unparsable input becomes an empty string,
/// which then fails [`is_canonical`].
pub fn to_canonical(input: &str) -> String {
    parse_flexible(input)
        .map(|date| date.format(CANONICAL_FORMAT).to_string())
        .unwrap_or_default()
}

/// `yyyy-mm-dd` form as used by `<input type="date">`, empty when unparsable
pub fn to_iso(input: &str) -> String {
    parse_flexible(input)
        .map(|date| date.format(ISO_FORMAT).to_string())
        .unwrap_or_default()
}
