//! Configuration loading functionality.
//!
//! This module loads the [`RosterConfig`] from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::RosterConfig;

/// Loads configuration from the specified YAML file.
///
/// # Arguments
///
/// * `path` - Path to the configuration file (e.g., "./config/roster.yaml")
///
/// # Returns
///
/// Returns the parsed [`RosterConfig`] on success, or an error if the file
/// is missing or contains invalid YAML.
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::load_config;
///
/// let config = load_config("./config/roster.yaml")?;
/// println!("Base airport: {}", config.base_airport);
/// # Ok::<(), roster_engine::error::EngineError>(())
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> EngineResult<RosterConfig> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
        path: path_str,
        message: e.to_string(),
    })
}
