//! Transcript parsing for the roster engine.
//!
//! This module contains the three parsing stages: period detection (which
//! year and month the page covers), line classification (date markers,
//! flight legs, keyword markers), and the schedule builder that walks the
//! classified lines and fills the month skeleton.

mod line;
mod period;
mod schedule;

pub use line::{ParsedLine, classify_line};
pub use period::detect_period;
pub use schedule::ScheduleBuilder;
