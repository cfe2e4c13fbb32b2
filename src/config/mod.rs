//! Configuration for the roster engine.
//!
//! The base airport and the keyword sets that drive line classification are
//! data, not code: they are loaded from a YAML file, with defaults matching
//! the roster format the engine was built for.

mod loader;
mod types;

pub use loader::load_config;
pub use types::RosterConfig;
