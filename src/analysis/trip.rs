//! Trip boundary analysis.
//!
//! A single left-to-right pass over the day array resolves the provisional
//! per-day classifications into final duty types. Two pieces of state are
//! carried across days: whether the crew is currently away from base, and a
//! pending arrival flight whose clock time belongs to the next calendar
//! day. Each day is decided by the first matching rule of a strict priority
//! list; no day is visited twice and there is no backtracking.
//!
//! The state is threaded explicitly as an accumulator: [`resolve_day`] is a
//! pure function from (day, state) to (resolution, next state), and
//! [`analyze_trips`] is the left fold that applies it, so intermediate
//! states are inspectable in tests without re-running the whole pass.

use tracing::debug;

use crate::models::{DaySlot, DutyType, TripPosition};

/// The machine state carried across days during trip analysis.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TripState {
    /// True while an open trip has left the base airport and not returned.
    pub away_from_base: bool,
    /// The flight number of an inbound leg that lands on the following
    /// calendar day; forces the next day to settle as the trip end.
    pub pending_arrival: Option<String>,
}

/// The outcome of resolving one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayResolution {
    /// The finalized duty type for the day.
    pub duty: DutyType,
    /// A primary flight number to install on the day, if the fired rule
    /// designates one; `None` leaves the builder's assignment standing.
    pub flight_number: Option<String>,
    /// The state to carry into the following day.
    pub state: TripState,
}

/// Resolves one day against the carried state. Exactly one rule fires.
///
/// Rules in priority order:
/// 1. A pending arrival forces the day to settle as the trip end, adopting
///    the pending flight number.
/// 2. A confirmed ground day (no legs, provisionally off or training)
///    keeps its type and ends any open trip bookkeeping unconditionally.
/// 3. Legs both departing and arriving at base: a same-day inbound is a
///    turnaround; an inbound landing tomorrow starts an overnight trip
///    with its arrival left pending.
/// 4. Departing base without returning starts a trip.
/// 5. Arriving at base without departing ends the trip, unless the arrival
///    lands tomorrow, in which case the day continues and the settlement
///    is deferred.
/// 6. Away from base with no base-touching legs: positioning legs continue
///    the trip; an empty day is an outstation layover.
/// 7. Nothing applies: the provisional type is left untouched.
pub fn resolve_day(slot: &DaySlot, state: &TripState, base_airport: &str) -> DayResolution {
    // Rule 1: forced settlement of a prior day's overnight arrival.
    if let Some(pending) = &state.pending_arrival {
        return DayResolution {
            duty: DutyType::MultiDayTrip(TripPosition::End),
            flight_number: Some(pending.clone()),
            state: TripState::default(),
        };
    }

    // Rule 2: a confirmed ground day always closes open bookkeeping.
    if slot.legs.is_empty() && matches!(slot.duty, DutyType::DayOff | DutyType::Training) {
        return DayResolution {
            duty: slot.duty,
            flight_number: None,
            state: TripState::default(),
        };
    }

    let outbound = slot.legs.iter().find(|leg| leg.departs_from(base_airport));
    let inbound = slot.legs.iter().find(|leg| leg.arrives_at(base_airport));

    match (outbound, inbound) {
        // Rule 3: out and back on the same listed day.
        (Some(_), Some(inbound)) => {
            if inbound.arrives_next_day {
                // The pair is listed on one day, but the inbound clock time
                // belongs to tomorrow.
                DayResolution {
                    duty: DutyType::MultiDayTrip(TripPosition::Start),
                    flight_number: None,
                    state: TripState {
                        away_from_base: true,
                        pending_arrival: Some(inbound.flight_number.clone()),
                    },
                }
            } else {
                DayResolution {
                    duty: DutyType::Turnaround,
                    flight_number: None,
                    state: TripState::default(),
                }
            }
        }
        // Rule 4: departs base, does not return.
        (Some(outbound), None) => DayResolution {
            duty: DutyType::MultiDayTrip(TripPosition::Start),
            flight_number: Some(outbound.flight_number.clone()),
            state: TripState {
                away_from_base: true,
                pending_arrival: None,
            },
        },
        // Rule 5: returns to base, possibly landing tomorrow.
        (None, Some(inbound)) => {
            if inbound.arrives_next_day {
                DayResolution {
                    duty: DutyType::MultiDayTrip(TripPosition::Continuing),
                    flight_number: None,
                    state: TripState {
                        away_from_base: true,
                        pending_arrival: Some(inbound.flight_number.clone()),
                    },
                }
            } else {
                DayResolution {
                    duty: DutyType::MultiDayTrip(TripPosition::End),
                    flight_number: Some(inbound.flight_number.clone()),
                    state: TripState::default(),
                }
            }
        }
        // Rules 6 and 7: no leg touches base.
        (None, None) => {
            if state.away_from_base {
                let duty = if slot.legs.is_empty() {
                    DutyType::Layover
                } else {
                    // Outstation-to-outstation positioning.
                    DutyType::MultiDayTrip(TripPosition::Continuing)
                };
                DayResolution {
                    duty,
                    flight_number: None,
                    state: state.clone(),
                }
            } else {
                DayResolution {
                    duty: slot.duty,
                    flight_number: None,
                    state: state.clone(),
                }
            }
        }
    }
}

/// Runs the trip-analysis pass over the whole month, in place.
///
/// Returns the terminal state: a trip still open at month end (presumably
/// continuing into the following month) is a valid outcome, not an error.
///
/// # Example
///
/// ```
/// use roster_engine::analysis::analyze_trips;
/// use roster_engine::config::RosterConfig;
/// use roster_engine::models::{DutyType, RosterPeriod, TripPosition};
/// use roster_engine::parsing::ScheduleBuilder;
///
/// let config = RosterConfig::default();
/// let mut days = RosterPeriod { year: 2025, month: 12 }.days().unwrap();
/// ScheduleBuilder::new(&config)
///     .apply_transcript(&mut days, "06 Sat\nBR51 2300 TPE LAX 0600+1\n");
///
/// let terminal = analyze_trips(&mut days, &config.base_airport);
/// assert_eq!(days[5].duty, DutyType::MultiDayTrip(TripPosition::Start));
/// assert_eq!(days[6].duty, DutyType::Layover);
/// assert!(terminal.away_from_base);
/// ```
pub fn analyze_trips(days: &mut [DaySlot], base_airport: &str) -> TripState {
    let mut state = TripState::default();
    for slot in days.iter_mut() {
        let resolution = resolve_day(slot, &state, base_airport);
        slot.duty = resolution.duty;
        if let Some(flight) = resolution.flight_number {
            slot.flight_number = Some(flight);
        }
        debug!(day = slot.day, duty = %slot.duty, "day resolved");
        state = resolution.state;
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::models::FlightLeg;

    const BASE: &str = "TPE";

    fn slot(day: u32) -> DaySlot {
        DaySlot::new(NaiveDate::from_ymd_opt(2025, 12, day).unwrap())
    }

    fn leg(flight: &str, dep: &str, arr: &str, next_day: bool) -> FlightLeg {
        FlightLeg {
            flight_number: flight.to_string(),
            departure_airport: dep.to_string(),
            arrival_airport: arr.to_string(),
            departure_time: "0900".to_string(),
            arrival_time: "1700".to_string(),
            arrives_next_day: next_day,
        }
    }

    fn slot_with_legs(day: u32, legs: Vec<FlightLeg>) -> DaySlot {
        let mut slot = slot(day);
        slot.flight_number = legs.first().map(|l| l.flight_number.clone());
        slot.legs = legs;
        slot.duty = DutyType::Turnaround;
        slot
    }

    fn away(pending: Option<&str>) -> TripState {
        TripState {
            away_from_base: true,
            pending_arrival: pending.map(|s| s.to_string()),
        }
    }

    // =========================================================================
    // Rule 1: forced settlement
    // =========================================================================

    #[test]
    fn test_pending_arrival_forces_trip_end() {
        let day = slot(7);
        let resolution = resolve_day(&day, &away(Some("BR51")), BASE);
        assert_eq!(resolution.duty, DutyType::MultiDayTrip(TripPosition::End));
        assert_eq!(resolution.flight_number.as_deref(), Some("BR51"));
        assert_eq!(resolution.state, TripState::default());
    }

    #[test]
    fn test_forced_settlement_outranks_ground_day() {
        // Even a day marked off settles first if an arrival is pending.
        let mut day = slot(7);
        day.duty = DutyType::DayOff;
        let resolution = resolve_day(&day, &away(Some("BR51")), BASE);
        assert_eq!(resolution.duty, DutyType::MultiDayTrip(TripPosition::End));
    }

    // =========================================================================
    // Rule 2: reset on confirmed ground days
    // =========================================================================

    #[test]
    fn test_day_off_keeps_type_and_clears_state() {
        let mut day = slot(10);
        day.duty = DutyType::DayOff;
        let resolution = resolve_day(&day, &away(None), BASE);
        assert_eq!(resolution.duty, DutyType::DayOff);
        assert_eq!(resolution.state, TripState::default());
    }

    #[test]
    fn test_training_day_clears_state() {
        let mut day = slot(10);
        day.duty = DutyType::Training;
        let resolution = resolve_day(&day, &away(None), BASE);
        assert_eq!(resolution.duty, DutyType::Training);
        assert!(!resolution.state.away_from_base);
    }

    #[test]
    fn test_day_off_with_legs_is_not_a_reset() {
        // Rule 2 requires an empty day; legs push it down to the leg rules.
        let mut day = slot_with_legs(10, vec![leg("BR18", "TPE", "OKA", false)]);
        day.duty = DutyType::DayOff;
        let resolution = resolve_day(&day, &TripState::default(), BASE);
        assert_eq!(resolution.duty, DutyType::MultiDayTrip(TripPosition::Start));
    }

    // =========================================================================
    // Rule 3: turnaround / overnight start
    // =========================================================================

    #[test]
    fn test_same_day_out_and_back_is_turnaround() {
        let day = slot_with_legs(
            5,
            vec![
                leg("BR18", "TPE", "OKA", false),
                leg("BR17", "OKA", "TPE", false),
            ],
        );
        let resolution = resolve_day(&day, &TripState::default(), BASE);
        assert_eq!(resolution.duty, DutyType::Turnaround);
        assert_eq!(resolution.flight_number, None);
        assert_eq!(resolution.state, TripState::default());
    }

    #[test]
    fn test_out_and_back_with_overnight_inbound_starts_trip() {
        let day = slot_with_legs(
            5,
            vec![
                leg("BR16", "TPE", "NRT", false),
                leg("BR15", "NRT", "TPE", true),
            ],
        );
        let resolution = resolve_day(&day, &TripState::default(), BASE);
        assert_eq!(resolution.duty, DutyType::MultiDayTrip(TripPosition::Start));
        assert!(resolution.state.away_from_base);
        assert_eq!(resolution.state.pending_arrival.as_deref(), Some("BR15"));
    }

    // =========================================================================
    // Rule 4: trip start
    // =========================================================================

    #[test]
    fn test_departure_without_return_starts_trip() {
        let day = slot_with_legs(6, vec![leg("BR51", "TPE", "LAX", true)]);
        let resolution = resolve_day(&day, &TripState::default(), BASE);
        assert_eq!(resolution.duty, DutyType::MultiDayTrip(TripPosition::Start));
        assert_eq!(resolution.flight_number.as_deref(), Some("BR51"));
        assert!(resolution.state.away_from_base);
        assert_eq!(resolution.state.pending_arrival, None);
    }

    // =========================================================================
    // Rule 5: trip end / deferred end
    // =========================================================================

    #[test]
    fn test_same_day_return_ends_trip() {
        let day = slot_with_legs(9, vec![leg("BR52", "LAX", "TPE", false)]);
        let resolution = resolve_day(&day, &away(None), BASE);
        assert_eq!(resolution.duty, DutyType::MultiDayTrip(TripPosition::End));
        assert_eq!(resolution.flight_number.as_deref(), Some("BR52"));
        assert_eq!(resolution.state, TripState::default());
    }

    #[test]
    fn test_overnight_return_defers_the_end() {
        let day = slot_with_legs(9, vec![leg("BR52", "LAX", "TPE", true)]);
        let resolution = resolve_day(&day, &away(None), BASE);
        assert_eq!(
            resolution.duty,
            DutyType::MultiDayTrip(TripPosition::Continuing)
        );
        assert!(resolution.state.away_from_base);
        assert_eq!(resolution.state.pending_arrival.as_deref(), Some("BR52"));
    }

    // =========================================================================
    // Rule 6: in-transit default
    // =========================================================================

    #[test]
    fn test_empty_day_while_away_is_layover() {
        let day = slot(8);
        let resolution = resolve_day(&day, &away(None), BASE);
        assert_eq!(resolution.duty, DutyType::Layover);
        assert!(resolution.state.away_from_base);
    }

    #[test]
    fn test_positioning_legs_while_away_continue_the_trip() {
        let day = slot_with_legs(8, vec![leg("BR71", "LAX", "SFO", false)]);
        let resolution = resolve_day(&day, &away(None), BASE);
        assert_eq!(
            resolution.duty,
            DutyType::MultiDayTrip(TripPosition::Continuing)
        );
        assert!(resolution.state.away_from_base);
    }

    // =========================================================================
    // Rule 7: nothing applies
    // =========================================================================

    #[test]
    fn test_empty_day_at_base_stays_unknown() {
        let day = slot(3);
        let resolution = resolve_day(&day, &TripState::default(), BASE);
        assert_eq!(resolution.duty, DutyType::Unknown);
        assert_eq!(resolution.state, TripState::default());
    }

    #[test]
    fn test_outstation_legs_while_at_base_keep_provisional_type() {
        // OCR noise case: legs touching neither end of a trip while the
        // machine believes the crew is home.
        let day = slot_with_legs(3, vec![leg("BR71", "LAX", "SFO", false)]);
        let resolution = resolve_day(&day, &TripState::default(), BASE);
        assert_eq!(resolution.duty, DutyType::Turnaround);
    }

    // =========================================================================
    // The fold
    // =========================================================================

    #[test]
    fn test_settlement_chain_across_days() {
        // Day 6's inbound lands tomorrow; day 7 has no legs at all but is
        // forced to settle as the trip end.
        let mut days = vec![
            slot_with_legs(
                6,
                vec![
                    leg("BR16", "TPE", "NRT", false),
                    leg("BR15", "NRT", "TPE", true),
                ],
            ),
            slot(7),
            slot(8),
        ];
        let terminal = analyze_trips(&mut days, BASE);

        assert_eq!(days[0].duty, DutyType::MultiDayTrip(TripPosition::Start));
        assert_eq!(days[1].duty, DutyType::MultiDayTrip(TripPosition::End));
        assert_eq!(days[1].flight_number.as_deref(), Some("BR15"));
        assert_eq!(days[2].duty, DutyType::Unknown);
        assert_eq!(terminal, TripState::default());
    }

    #[test]
    fn test_outbound_next_day_flag_does_not_defer_settlement() {
        // Only arrivals at base create a pending settlement; an outbound
        // leg landing tomorrow just opens the trip.
        let mut days = vec![slot_with_legs(6, vec![leg("BR51", "TPE", "LAX", true)]), slot(7)];
        let terminal = analyze_trips(&mut days, BASE);
        assert_eq!(days[0].duty, DutyType::MultiDayTrip(TripPosition::Start));
        assert_eq!(days[1].duty, DutyType::Layover);
        assert!(terminal.away_from_base);
        assert_eq!(terminal.pending_arrival, None);
    }

    #[test]
    fn test_layover_runs_between_start_and_end() {
        let mut days = vec![
            slot_with_legs(1, vec![leg("BR87", "TPE", "CDG", false)]),
            slot(2),
            slot(3),
            slot_with_legs(4, vec![leg("BR88", "CDG", "TPE", false)]),
        ];
        analyze_trips(&mut days, BASE);

        assert_eq!(days[0].duty, DutyType::MultiDayTrip(TripPosition::Start));
        assert_eq!(days[1].duty, DutyType::Layover);
        assert_eq!(days[2].duty, DutyType::Layover);
        assert_eq!(days[3].duty, DutyType::MultiDayTrip(TripPosition::End));
        assert_eq!(days[3].flight_number.as_deref(), Some("BR88"));
    }

    #[test]
    fn test_open_trip_at_month_end_is_valid() {
        let mut days = vec![
            slot_with_legs(30, vec![leg("BR51", "TPE", "LAX", false)]),
            slot(31),
        ];
        let terminal = analyze_trips(&mut days, BASE);
        assert_eq!(days[1].duty, DutyType::Layover);
        assert!(terminal.away_from_base);
    }

    #[test]
    fn test_ground_day_interrupts_open_trip() {
        // A confirmed off day ends trip bookkeeping even though no return
        // leg was ever seen.
        let mut off_day = slot(12);
        off_day.duty = DutyType::DayOff;
        let mut days = vec![
            slot_with_legs(11, vec![leg("BR51", "TPE", "LAX", false)]),
            off_day,
            slot(13),
        ];
        analyze_trips(&mut days, BASE);
        assert_eq!(days[1].duty, DutyType::DayOff);
        // Day 13 is no longer away: it stays unknown instead of layover.
        assert_eq!(days[2].duty, DutyType::Unknown);
    }

    #[test]
    fn test_turnaround_does_not_set_primary_flight() {
        // The builder's first-leg assignment stands on turnaround days.
        let mut days = vec![slot_with_legs(
            5,
            vec![
                leg("BR18", "TPE", "OKA", false),
                leg("BR17", "OKA", "TPE", false),
            ],
        )];
        analyze_trips(&mut days, BASE);
        assert_eq!(days[0].flight_number.as_deref(), Some("BR18"));
    }
}
