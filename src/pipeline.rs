//! End-to-end roster parsing.
//!
//! Wires the stages together: month skeleton, schedule building from the
//! transcript, and the trip-analysis pass. The whole run is synchronous,
//! performs no I/O, and is deterministic: the same transcript and period
//! always produce the same day array.

use chrono::NaiveDate;

use crate::analysis::analyze_trips;
use crate::config::RosterConfig;
use crate::error::EngineResult;
use crate::models::{DaySlot, RosterPeriod};
use crate::parsing::{ScheduleBuilder, detect_period};

/// Parses a transcript into the finalized day array for the given period.
///
/// The only fallible step is building the skeleton: a period that does not
/// denote a real calendar month is rejected. Everything inside the parse
/// itself is absorbed: unrecognized lines, out-of-range date markers, and
/// days with no lines at all.
///
/// # Example
///
/// ```
/// use roster_engine::config::RosterConfig;
/// use roster_engine::models::{DutyType, RosterPeriod};
/// use roster_engine::pipeline::parse_roster;
///
/// let config = RosterConfig::default();
/// let period = RosterPeriod { year: 2025, month: 12 };
/// let days = parse_roster("05 Fri\nBR18 0900 TPE OKA 1100\nBR17 1200 OKA TPE 1400\n", period, &config).unwrap();
///
/// assert_eq!(days.len(), 31);
/// assert_eq!(days[4].duty, DutyType::Turnaround);
/// ```
pub fn parse_roster(
    text: &str,
    period: RosterPeriod,
    config: &RosterConfig,
) -> EngineResult<Vec<DaySlot>> {
    let mut days = period.days()?;
    ScheduleBuilder::new(config).apply_transcript(&mut days, text);
    analyze_trips(&mut days, &config.base_airport);
    Ok(days)
}

/// Parses a transcript, detecting the period from the transcript itself.
///
/// `today` is the fallback for period detection when the page carries no
/// usable year or month evidence; see
/// [`detect_period`](crate::parsing::detect_period).
pub fn parse_roster_with_detection(
    text: &str,
    today: NaiveDate,
    config: &RosterConfig,
) -> EngineResult<Vec<DaySlot>> {
    let period = detect_period(text, today);
    parse_roster(text, period, config)
}
