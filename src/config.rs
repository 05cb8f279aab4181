use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Where the external documents live on disk.
#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,
    #[serde(default = "default_pantry_path")]
    pub pantry_path: String,
    #[serde(default = "default_mealplan_path")]
    pub mealplan_path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            pantry_path: default_pantry_path(),
            mealplan_path: default_mealplan_path(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_catalog_path() -> String {
    "data/catalog.json".to_string()
}

fn default_pantry_path() -> String {
    "data/pantry.json".to_string()
}

fn default_mealplan_path() -> String {
    "data/mealplan.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration with the following precedence:
    /// 1. Explicit --config path
    /// 2. PANTRYSWIPE_CONFIG environment variable
    /// 3. Optional pantryswipe.toml in the working directory
    /// plus PANTRYSWIPE_-prefixed environment overrides on top.
    pub fn load(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path));
        } else if let Ok(path) = env::var("PANTRYSWIPE_CONFIG") {
            builder = builder.add_source(File::with_name(&path));
        } else {
            builder = builder.add_source(File::with_name("pantryswipe").required(false));
        }

        builder = builder.add_source(Environment::with_prefix("PANTRYSWIPE").separator("__"));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let config = Config::default();
        assert_eq!(config.data.catalog_path, "data/catalog.json");
        assert_eq!(config.data.pantry_path, "data/pantry.json");
        assert_eq!(config.data.mealplan_path, "data/mealplan.json");
        assert_eq!(config.observability.log_level, "info");
    }
}
