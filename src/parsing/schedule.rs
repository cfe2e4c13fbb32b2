//! Schedule building from classified transcript lines.
//!
//! The builder walks the transcript in line order, moving a cursor over the
//! pre-built day array whenever a date marker appears and writing flight,
//! off, and training data into the cursor's day. Nothing here is fatal:
//! out-of-range markers and noise lines are absorbed and logged.

use tracing::{trace, warn};

use crate::config::RosterConfig;
use crate::models::{DaySlot, DutyType};

use super::line::{ParsedLine, classify_line};

/// Walks classified transcript lines and fills the month skeleton.
///
/// The only state carried between lines is an optional cursor index into
/// the day array. Lines arriving before the first date marker have nowhere
/// to go and are discarded.
///
/// # Example
///
/// ```
/// use roster_engine::config::RosterConfig;
/// use roster_engine::models::{DutyType, RosterPeriod};
/// use roster_engine::parsing::ScheduleBuilder;
///
/// let config = RosterConfig::default();
/// let mut days = RosterPeriod { year: 2025, month: 12 }.days().unwrap();
///
/// let mut builder = ScheduleBuilder::new(&config);
/// builder.apply_transcript(&mut days, "10 Wed\nOFF\n");
/// assert_eq!(days[9].duty, DutyType::DayOff);
/// ```
#[derive(Debug)]
pub struct ScheduleBuilder<'a> {
    config: &'a RosterConfig,
    cursor: Option<usize>,
}

impl<'a> ScheduleBuilder<'a> {
    /// Creates a builder with no cursor set.
    pub fn new(config: &'a RosterConfig) -> Self {
        ScheduleBuilder {
            config,
            cursor: None,
        }
    }

    /// Applies a whole newline-delimited transcript to the day array.
    pub fn apply_transcript(&mut self, days: &mut [DaySlot], text: &str) {
        for line in text.lines() {
            self.apply_line(days, line);
        }
    }

    /// Applies one transcript line (trimmed here) to the day array.
    pub fn apply_line(&mut self, days: &mut [DaySlot], line: &str) {
        match classify_line(line.trim(), self.config) {
            ParsedLine::DateMarker { day } => {
                // day 00 and days past the month length leave the cursor
                // where it was.
                match day.checked_sub(1).map(|i| i as usize) {
                    Some(index) if index < days.len() => self.cursor = Some(index),
                    _ => warn!(day, "date marker out of range for this month"),
                }
            }
            ParsedLine::FlightLeg(leg) => {
                let Some(slot) = self.cursor_slot(days) else {
                    return;
                };
                if slot.flight_number.is_none() {
                    slot.flight_number = Some(leg.flight_number.clone());
                }
                slot.legs.push(leg);
                // Provisional only; trip analysis decides the final type.
                slot.duty = DutyType::Turnaround;
            }
            ParsedLine::OffMarker => {
                if let Some(slot) = self.cursor_slot(days) {
                    slot.duty = DutyType::DayOff;
                }
            }
            ParsedLine::TrainingMarker { text } => {
                if let Some(slot) = self.cursor_slot(days) {
                    slot.duty = DutyType::Training;
                    slot.annotation = Some(text);
                }
            }
            ParsedLine::Unrecognized => trace!(line, "unrecognized line discarded"),
        }
    }

    fn cursor_slot<'d>(&self, days: &'d mut [DaySlot]) -> Option<&'d mut DaySlot> {
        match self.cursor {
            Some(index) => days.get_mut(index),
            None => {
                trace!("line before first date marker discarded");
                None
            }
        }
    }
}
