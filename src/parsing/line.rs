//! Roster line classification.
//!
//! Classifies one trimmed transcript line into a date marker, a flight-leg
//! record, an off/training keyword marker, or noise. The matchers form an
//! explicit ordered list evaluated top-down with first-match-wins semantics,
//! so a line belongs to exactly one category and each matcher can be unit
//! tested on its own.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::RosterConfig;
use crate::models::FlightLeg;

/// The classification of one transcript line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// A day header such as "05 Mon": positions the schedule cursor.
    DateMarker {
        /// The two-digit day of month from the line.
        day: u32,
    },
    /// A recognized flight segment.
    FlightLeg(FlightLeg),
    /// A line containing a day-off keyword.
    OffMarker,
    /// A line containing a ground-training keyword.
    TrainingMarker {
        /// The full matched line, kept as the day's annotation.
        text: String,
    },
    /// A line matching no pattern; produces no effect.
    Unrecognized,
}

/// Day number followed by a 3-letter weekday abbreviation at line start.
static DATE_MARKER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2})\s+(Mon|Tue|Wed|Thu|Fri|Sat|Sun)").expect("valid regex"));

/// Flight code, departure time, two airport codes, arrival time, and an
/// arbitrary trailing suffix.
static FLIGHT_LEG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z0-9]+)\s+(\d{4})\s+([A-Z]{3})\s+([A-Z]{3})\s+(\d{4})(.*)$")
        .expect("valid regex")
});

/// One classification matcher: `Some` claims the line, `None` passes it on.
type Matcher = fn(&str, &RosterConfig) -> Option<ParsedLine>;

/// The ordered matcher list. Evaluation is top-down and the first match
/// wins, so a date marker never also triggers the leg or keyword checks.
const MATCHERS: [Matcher; 4] = [
    match_date_marker,
    match_flight_leg,
    match_off_marker,
    match_training_marker,
];

/// Classifies one already-trimmed transcript line.
///
/// # Example
///
/// ```
/// use roster_engine::config::RosterConfig;
/// use roster_engine::parsing::{ParsedLine, classify_line};
///
/// let config = RosterConfig::default();
/// assert_eq!(
///     classify_line("05 Mon", &config),
///     ParsedLine::DateMarker { day: 5 }
/// );
/// assert_eq!(classify_line("OFF", &config), ParsedLine::OffMarker);
/// assert_eq!(classify_line("~~ smudge ~~", &config), ParsedLine::Unrecognized);
/// ```
pub fn classify_line(line: &str, config: &RosterConfig) -> ParsedLine {
    MATCHERS
        .iter()
        .find_map(|matcher| matcher(line, config))
        .unwrap_or(ParsedLine::Unrecognized)
}

/// Matches a day header such as "17 Fri".
fn match_date_marker(line: &str, _config: &RosterConfig) -> Option<ParsedLine> {
    let captures = DATE_MARKER_PATTERN.captures(line)?;
    let day = captures[1].parse().ok()?;
    Some(ParsedLine::DateMarker { day })
}

/// Matches a flight segment such as "BR51 2300 TPE LAX 0600+1".
///
/// The next-day flag is set iff the trailing suffix contains "+1" or "*1"
/// anywhere: OCR frequently pads or distorts the characters around the
/// marker, so an exact-position match would drop real overnight arrivals.
fn match_flight_leg(line: &str, _config: &RosterConfig) -> Option<ParsedLine> {
    let captures = FLIGHT_LEG_PATTERN.captures(line)?;
    let suffix = &captures[6];
    Some(ParsedLine::FlightLeg(FlightLeg {
        flight_number: captures[1].to_string(),
        departure_airport: captures[3].to_string(),
        arrival_airport: captures[4].to_string(),
        departure_time: captures[2].to_string(),
        arrival_time: captures[5].to_string(),
        arrives_next_day: suffix.contains("+1") || suffix.contains("*1"),
    }))
}

/// Matches a line containing any configured day-off keyword.
fn match_off_marker(line: &str, config: &RosterConfig) -> Option<ParsedLine> {
    config
        .off_keywords
        .iter()
        .any(|keyword| line.contains(keyword.as_str()))
        .then_some(ParsedLine::OffMarker)
}

/// Matches a line containing any configured training keyword.
fn match_training_marker(line: &str, config: &RosterConfig) -> Option<ParsedLine> {
    config
        .training_keywords
        .iter()
        .any(|keyword| line.contains(keyword.as_str()))
        .then(|| ParsedLine::TrainingMarker {
            text: line.to_string(),
        })
}
