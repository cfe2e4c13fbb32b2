//! Trip analysis for the roster engine.
//!
//! This module contains the stateful forward pass that turns the
//! provisional day classifications produced by parsing into final duty
//! types and trip boundaries, plus a weaker gap-filling heuristic kept as a
//! degraded fallback.

mod gap_fill;
mod trip;

pub use gap_fill::fill_gaps;
pub use trip::{DayResolution, TripState, analyze_trips, resolve_day};
