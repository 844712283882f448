//! Configuration loading and management.
//!
//! This module provides the working-time limits, fatigue parameter
//! defaults and FGI/FRI thresholds used by the engine, loadable from YAML.
//!
//! # Example
//!
//! ```no_run
//! use fatigue_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Max weekly hours: {}", config.config().limits.max_weekly_hours);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ComplianceLimits, EngineConfig, FatigueConfig, FatigueThresholds, FgiTiers, ParameterDefaults,
};
