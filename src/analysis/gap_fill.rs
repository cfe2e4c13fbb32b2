//! Gap-filling fallback heuristic.
//!
//! A simpler, non-authoritative alternative to the trip-analysis state
//! machine: it inherits trip membership from the previous day instead of
//! tracking base departures and arrivals. It cannot resolve next-day
//! arrival timing, so it exists only as a degraded mode for rosters whose
//! leg-level "+1" flags are unavailable. The pipeline never calls it; the
//! two policies are deliberately kept separate.

use crate::models::{DaySlot, DutyType, TripPosition};

/// Fills Unknown days from their surroundings, in place.
///
/// Two repairs, applied in one pass:
/// - An Unknown day whose predecessor is a multi-day trip day or a layover
///   becomes a Layover and inherits the predecessor's primary flight
///   number.
/// - A Turnaround day whose successor is a layover or a multi-day trip day
///   is promoted to the start of a multi-day trip.
pub fn fill_gaps(days: &mut [DaySlot]) {
    for i in 0..days.len() {
        if days[i].duty == DutyType::Unknown && i > 0 {
            let previous = &days[i - 1];
            if matches!(
                previous.duty,
                DutyType::MultiDayTrip(_) | DutyType::Layover
            ) {
                let inherited = previous.flight_number.clone();
                days[i].duty = DutyType::Layover;
                days[i].flight_number = inherited;
            }
        }

        if days[i].duty == DutyType::Turnaround && i + 1 < days.len() {
            let next = &days[i + 1];
            if matches!(next.duty, DutyType::Layover | DutyType::MultiDayTrip(_)) {
                days[i].duty = DutyType::MultiDayTrip(TripPosition::Start);
            }
        }
    }
}
