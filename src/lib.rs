//! Duty Classification Engine for OCR-Scanned Crew Rosters
//!
//! This crate converts a noisy, line-oriented OCR transcript of an airline
//! crew roster page into a per-day duty classification covering an entire
//! calendar month: date-marker, flight-leg, and keyword lines are written
//! into a month skeleton, then a single stateful forward pass resolves
//! turnarounds, multi-day trips, overnight layovers, and delayed ("+1")
//! arrivals into a consistent final state for every day.

#![warn(missing_docs)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
pub mod pipeline;
