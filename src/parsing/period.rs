//! Roster period detection.
//!
//! Infers which (year, month) a transcript covers from free text. OCR
//! output rarely labels the period cleanly, so detection is best-effort:
//! a missing year or month falls back to an injected reference date rather
//! than raising an error.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::RosterPeriod;

/// How far into the transcript the month-name scan looks, in characters.
/// Month headers sit at the top of the page; deeper matches are more likely
/// to be OCR noise or unrelated remarks.
const MONTH_SCAN_LIMIT: usize = 1000;

/// Standalone 4-digit year tokens the roster can plausibly carry.
static YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(202[0-9])\b").expect("valid regex"));

/// Month names and 3-letter abbreviations, lowercase, paired with their
/// month numbers.
const MONTH_TABLE: [(&str, u32); 24] = [
    ("january", 1),
    ("february", 2),
    ("march", 3),
    ("april", 4),
    ("may", 5),
    ("june", 6),
    ("july", 7),
    ("august", 8),
    ("september", 9),
    ("october", 10),
    ("november", 11),
    ("december", 12),
    ("jan", 1),
    ("feb", 2),
    ("mar", 3),
    ("apr", 4),
    ("may", 5),
    ("jun", 6),
    ("jul", 7),
    ("aug", 8),
    ("sep", 9),
    ("oct", 10),
    ("nov", 11),
    ("dec", 12),
];

/// Detects the (year, month) a transcript covers.
///
/// The year is the first standalone 4-digit token in the range 2020-2029
/// anywhere in the text. The month is the earliest occurrence of any month
/// name or 3-letter abbreviation (case-insensitive) within the first 1000
/// characters. Either search failing falls back to `today`'s year or month;
/// no error is ever raised.
///
/// `today` is an injected reference date so callers (and tests) control the
/// fallback instead of the engine reading the system clock.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use roster_engine::parsing::detect_period;
///
/// let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
/// let period = detect_period("Crew roster December 2025\n01 Mon\n", today);
/// assert_eq!(period.year, 2025);
/// assert_eq!(period.month, 12);
///
/// // No evidence at all: fall back to the reference date.
/// let period = detect_period("garbled page", today);
/// assert_eq!((period.year, period.month), (2026, 8));
/// ```
pub fn detect_period(text: &str, today: NaiveDate) -> RosterPeriod {
    let year = detect_year(text).unwrap_or_else(|| {
        debug!(fallback = today.year(), "no year token found in transcript");
        today.year()
    });
    let month = detect_month(text).unwrap_or_else(|| {
        debug!(fallback = today.month(), "no month name found in transcript");
        today.month()
    });
    RosterPeriod { year, month }
}

/// Finds the first standalone 2020-2029 token anywhere in the text.
fn detect_year(text: &str) -> Option<i32> {
    YEAR_PATTERN
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
}

/// Finds the earliest month-name occurrence in the scan prefix.
fn detect_month(text: &str) -> Option<u32> {
    let prefix: String = text
        .chars()
        .take(MONTH_SCAN_LIMIT)
        .collect::<String>()
        .to_lowercase();

    MONTH_TABLE
        .iter()
        .filter_map(|&(name, month)| prefix.find(name).map(|pos| (pos, month)))
        .min_by_key(|&(pos, _)| pos)
        .map(|(_, month)| month)
}
