//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{ComplianceLimits, EngineConfig, FatigueConfig};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── limits.yaml   # Working-time limits
/// └── fatigue.yaml  # Parameter defaults and FGI/FRI thresholds
/// ```
///
/// # Example
///
/// ```no_run
/// use fatigue_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Minimum rest: {}h", loader.config().limits.min_rest_hours);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if either file is missing and
    /// [`EngineError::ConfigParseError`] if either contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let limits = Self::load_yaml::<ComplianceLimits>(&path.join("limits.yaml"))?;
        let fatigue = Self::load_yaml::<FatigueConfig>(&path.join("fatigue.yaml"))?;

        Ok(Self {
            config: EngineConfig::new(limits, fatigue),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> EngineConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn config_path() -> &'static str {
        "./config/default"
    }

    #[test]
    fn test_load_shipped_configuration_matches_defaults() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        assert_eq!(result.unwrap().config(), &EngineConfig::default());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match ConfigLoader::load("/nonexistent/path") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("limits.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = std::env::temp_dir().join(format!("fatigue-engine-cfg-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("limits.yaml"), "max_shift_hours: [not, a, number]\n").unwrap();
        fs::write(dir.join("fatigue.yaml"), "{}\n").unwrap();

        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).ok();

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("limits.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_load_overrides() {
        let dir = std::env::temp_dir().join(format!("fatigue-engine-cfg-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("limits.yaml"), "min_rest_hours: 11\n").unwrap();
        fs::write(dir.join("fatigue.yaml"), "defaults:\n  commute_in: 45\n").unwrap();

        let loader = ConfigLoader::load(&dir).unwrap();
        fs::remove_dir_all(&dir).ok();

        assert_eq!(loader.config().limits.min_rest_hours, Decimal::new(11, 0));
        assert_eq!(loader.config().defaults.commute_in, 45);
        assert_eq!(loader.config().defaults.commute_out, 30);
    }
}
