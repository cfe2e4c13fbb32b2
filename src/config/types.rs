//! Configuration types for the roster engine.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from the YAML configuration file.

use serde::Deserialize;

/// Configuration for roster parsing and trip analysis.
///
/// # Example
///
/// ```
/// use roster_engine::config::RosterConfig;
///
/// let config = RosterConfig::default();
/// assert_eq!(config.base_airport, "TPE");
/// assert!(config.off_keywords.iter().any(|k| k == "OFF"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RosterConfig {
    /// The crew's home station; trips are defined relative to departures
    /// from and arrivals at this airport.
    pub base_airport: String,
    /// Keywords whose presence in a line marks a day off.
    #[serde(default = "default_off_keywords")]
    pub off_keywords: Vec<String>,
    /// Keywords whose presence in a line marks a ground training day.
    #[serde(default = "default_training_keywords")]
    pub training_keywords: Vec<String>,
}

fn default_off_keywords() -> Vec<String> {
    ["OFF", "ADO", "Assigned day off"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_training_keywords() -> Vec<String> {
    ["BC", "ETS", "SIM", "COURSE"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for RosterConfig {
    fn default() -> Self {
        RosterConfig {
            base_airport: "TPE".to_string(),
            off_keywords: default_off_keywords(),
            training_keywords: default_training_keywords(),
        }
    }
}
