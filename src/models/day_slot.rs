//! Day slot model and duty classification types.
//!
//! This module defines the DaySlot struct (one calendar day of the roster)
//! and the DutyType enum that classifies it.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::FlightLeg;

/// The position of a day within a multi-day trip.
///
/// Carried inside [`DutyType::MultiDayTrip`] so that a day can never be
/// marked as both the start and the end of a trip at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripPosition {
    /// First day of the trip: departs base without returning the same day.
    Start,
    /// Last day of the trip: returns to base.
    End,
    /// A middle day: still away from base, with or without positioning legs.
    Continuing,
}

/// The duty classification of one roster day.
///
/// A closed set of variants rather than a struct with independent flags;
/// trip-boundary information lives inside [`DutyType::MultiDayTrip`].
///
/// # Example
///
/// ```
/// use roster_engine::models::{DutyType, TripPosition};
///
/// let duty = DutyType::MultiDayTrip(TripPosition::Start);
/// assert!(duty.is_trip_start());
/// assert!(!duty.is_trip_end());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyType {
    /// No roster line matched this day, and trip analysis assigned nothing.
    Unknown,
    /// A rostered day off (OFF, ADO, ...).
    DayOff,
    /// Ground training or a course day.
    Training,
    /// Departs from and returns to the base airport within the listed day.
    Turnaround,
    /// Part of a trip spanning several days, with its position in the trip.
    MultiDayTrip(TripPosition),
    /// A rest day at an outstation inside an open trip, with no legs flown.
    Layover,
}

impl DutyType {
    /// Returns true for the first day of a multi-day trip.
    pub fn is_trip_start(&self) -> bool {
        matches!(self, DutyType::MultiDayTrip(TripPosition::Start))
    }

    /// Returns true for the last day of a multi-day trip.
    pub fn is_trip_end(&self) -> bool {
        matches!(self, DutyType::MultiDayTrip(TripPosition::End))
    }

    /// Returns true for a middle day of a multi-day trip.
    pub fn is_continuing(&self) -> bool {
        matches!(self, DutyType::MultiDayTrip(TripPosition::Continuing))
    }
}

impl std::fmt::Display for DutyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DutyType::Unknown => write!(f, "Unknown"),
            DutyType::DayOff => write!(f, "DayOff"),
            DutyType::Training => write!(f, "Training"),
            DutyType::Turnaround => write!(f, "Turnaround"),
            DutyType::MultiDayTrip(TripPosition::Start) => write!(f, "TripStart"),
            DutyType::MultiDayTrip(TripPosition::End) => write!(f, "TripEnd"),
            DutyType::MultiDayTrip(TripPosition::Continuing) => write!(f, "TripContinuing"),
            DutyType::Layover => write!(f, "Layover"),
        }
    }
}

/// One calendar day of the roster month.
///
/// All slots for a month are created together by
/// [`RosterPeriod::days`](super::RosterPeriod::days) with duty
/// [`DutyType::Unknown`] and no legs. The schedule builder fills legs and
/// provisional duty types from the transcript; trip analysis performs the
/// only mutation of the final duty type. No slot is created or destroyed
/// after the pass completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySlot {
    /// The calendar date.
    pub date: NaiveDate,
    /// The day of month (1-31).
    pub day: u32,
    /// The day of week, consistent with `date`.
    pub weekday: Weekday,
    /// The duty classification for this day.
    pub duty: DutyType,
    /// The primary flight number shown for this day, if any.
    pub flight_number: Option<String>,
    /// The flight legs recognized for this day, in OCR encounter order.
    #[serde(default)]
    pub legs: Vec<FlightLeg>,
    /// Free-text annotation (the matched line of a training day).
    pub annotation: Option<String>,
}

impl DaySlot {
    /// Creates an empty slot for the given date.
    pub fn new(date: NaiveDate) -> Self {
        use chrono::Datelike;
        DaySlot {
            date,
            day: date.day(),
            weekday: date.weekday(),
            duty: DutyType::Unknown,
            flight_number: None,
            legs: Vec::new(),
            annotation: None,
        }
    }

    /// Renders the day header form the roster prints, e.g. "05 Mon".
    pub fn date_label(&self) -> String {
        self.date.format("%d %a").to_string()
    }
}
