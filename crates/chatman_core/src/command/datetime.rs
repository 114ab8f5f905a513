//! Date-time argument parsing for `deadline` and `event`.
//!
//! Accepted shapes: `YYYY-MM-DD HHMM`, `YYYY-MM-DD HH:MM`, `YYYY-MM-DD`
//! (midnight).

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

static DATE_ONLY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));
static DATE_COMPACT_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2} \d{4}$").expect("valid compact time regex"));
static DATE_COLON_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}$").expect("valid colon time regex"));

/// Parses a user-supplied date-time; `None` when the shape or value is invalid.
pub fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    let text = raw.trim();
    if DATE_COMPACT_TIME_RE.is_match(text) {
        return NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H%M").ok();
    }
    if DATE_COLON_TIME_RE.is_match(text) {
        return NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M").ok();
    }
    if DATE_ONLY_RE.is_match(text) {
        return NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0));
    }
    None
}
