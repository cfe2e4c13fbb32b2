//! Flight leg model.
//!
//! This module defines the FlightLeg struct representing one OCR-recognized
//! flight segment on a roster line.

use serde::{Deserialize, Serialize};

/// Represents one flight segment recognized from a roster line.
///
/// Departure and arrival times are kept as the raw 4-digit strings the OCR
/// produced ("0900", "2330"). Classification must tolerate mangled clock
/// values such as "9999" without failing, so no time parsing happens here.
/// A leg is immutable once appended to a day.
///
/// # Example
///
/// ```
/// use roster_engine::models::FlightLeg;
///
/// let leg = FlightLeg {
///     flight_number: "BR51".to_string(),
///     departure_airport: "TPE".to_string(),
///     arrival_airport: "LAX".to_string(),
///     departure_time: "2300".to_string(),
///     arrival_time: "0600".to_string(),
///     arrives_next_day: true,
/// };
/// assert!(leg.departs_from("TPE"));
/// assert!(leg.arrives_at("LAX"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightLeg {
    /// The flight number (e.g., "BR51").
    pub flight_number: String,
    /// The 3-letter departure airport code (e.g., "TPE").
    pub departure_airport: String,
    /// The 3-letter arrival airport code (e.g., "LAX").
    pub arrival_airport: String,
    /// The departure time as the raw 4-digit OCR string (e.g., "2300").
    pub departure_time: String,
    /// The arrival time as the raw 4-digit OCR string (e.g., "0600").
    pub arrival_time: String,
    /// Whether the line carried a trailing "+1"/"*1" marker, meaning the
    /// arrival clock time belongs to the following calendar day.
    pub arrives_next_day: bool,
}

impl FlightLeg {
    /// Returns true if this leg departs from the given airport.
    pub fn departs_from(&self, airport: &str) -> bool {
        self.departure_airport == airport
    }

    /// Returns true if this leg arrives at the given airport.
    pub fn arrives_at(&self, airport: &str) -> bool {
        self.arrival_airport == airport
    }
}
