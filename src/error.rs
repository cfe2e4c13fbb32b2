//! Error types for the roster engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The parsing and trip-analysis core itself never fails: unrecognized
//! lines, out-of-range date markers, and missing period evidence are all
//! absorbed locally. Errors only arise at the edges: loading configuration
//! and building a month skeleton from an impossible period.

use thiserror::Error;

/// The main error type for the roster engine.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/roster.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/roster.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A (year, month) pair that does not denote a real calendar month.
    #[error("Invalid roster period: year {year}, month {month}")]
    InvalidPeriod {
        /// The rejected year.
        year: i32,
        /// The rejected month.
        month: u32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
