//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! defaults and business configuration entries from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ExpressionError, ExpressionResult};
use crate::models::BizConfig;

use super::types::{BizConfigsFile, EngineConfig, ScriptDefaults};

/// Loads and provides access to the helper configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── engine.yaml        # Engine name and script defaults
/// └── biz_configs.yaml   # Named business configuration entries
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_expressions::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Monthly divider: {}", loader.defaults().monthly_divider);
/// # Ok::<(), payroll_expressions::error::ExpressionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
    biz_configs: Vec<BizConfig>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> ExpressionResult<Self> {
        let path = path.as_ref();

        let config = Self::load_yaml::<EngineConfig>(&path.join("engine.yaml"))?;
        let biz_configs = Self::load_yaml::<BizConfigsFile>(&path.join("biz_configs.yaml"))?;

        debug!(
            name = %config.name,
            biz_configs = biz_configs.configs.len(),
            "Configuration loaded"
        );

        Ok(Self {
            config,
            biz_configs: biz_configs.configs,
        })
    }

    /// Creates a loader from already parsed values.
    pub fn from_parts(config: EngineConfig, biz_configs: Vec<BizConfig>) -> Self {
        Self {
            config,
            biz_configs,
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> ExpressionResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ExpressionError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ExpressionError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the script defaults.
    pub fn defaults(&self) -> &ScriptDefaults {
        &self.config.defaults
    }

    /// Returns all business configuration entries.
    pub fn biz_configs(&self) -> &[BizConfig] {
        &self.biz_configs
    }

    /// Gets a business configuration entry by name.
    ///
    /// Returns `ConfigValueNotFound` when no entry has the name.
    pub fn get_biz_config(&self, name: &str) -> ExpressionResult<&BizConfig> {
        self.biz_configs
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| ExpressionError::ConfigValueNotFound {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config/default"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().name, "default");
    }

    #[test]
    fn test_defaults_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let defaults = loader.defaults();

        assert_eq!(defaults.rounding_precision, 2);
        assert_eq!(defaults.monthly_divider, 158.0);
        assert_eq!(defaults.default_holiday_accrual, 2.5);
        assert_eq!(defaults.pay_stats_working_time, 158.0);
        assert_eq!(defaults.overtime_compensation_rate, 0.5);
        assert_eq!(defaults.default_hourly_row.count, 120.0);
        assert_eq!(defaults.default_hourly_row.price, 21.0);
        assert_eq!(defaults.holiday_script_pay, 180.0);
    }

    #[test]
    fn test_get_biz_config() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let divider = loader.get_biz_config("monthlyDivider").unwrap();
        assert_eq!(divider.data.as_f64(), Some(158.0));
    }

    #[test]
    fn test_get_biz_config_unknown_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.get_biz_config("unknown") {
            Err(ExpressionError::ConfigValueNotFound { name }) => {
                assert_eq!(name, "unknown");
            }
            _ => panic!("Expected ConfigValueNotFound error"),
        }
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(ExpressionError::ConfigNotFound { path }) => {
                assert!(path.contains("engine.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_from_parts() {
        let config: EngineConfig = serde_yaml::from_str("name: inline\n").unwrap();
        let loader = ConfigLoader::from_parts(config, vec![BizConfig::new("monthlyDivider", 160)]);

        assert_eq!(loader.biz_configs().len(), 1);
        assert_eq!(loader.defaults().monthly_divider, 158.0);
    }
}
