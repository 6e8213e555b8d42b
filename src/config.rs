use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use cookbook_recipe::{RecommendationConfig, StoreConfig};
use serde::Deserialize;
use std::{env, str::FromStr};
use strum::{Display, EnumString, VariantArray};

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub recommendation: RecommendationConfig,
}

#[derive(EnumString, Display, VariantArray, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn format(&self) -> Result<LogFormat, String> {
        LogFormat::from_str(&self.format).map_err(|_| {
            format!(
                "Unknown log format '{}', expected one of: {}",
                self.format,
                LogFormat::VARIANTS
                    .iter()
                    .map(|format| format.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    LogFormat::Pretty.to_string()
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HistoryConfig {
    #[serde(default = "default_history_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_history_capacity(),
        }
    }
}

fn default_history_capacity() -> usize {
    cookbook_recipe::DEFAULT_HISTORY_CAPACITY
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (COOKBOOK__RECOMMENDATION__LIMIT, etc.)
    /// 2. Config file specified by path, CONFIG_PATH or config/default.toml
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        Self::load_with(config_path, Environment::with_prefix("COOKBOOK"))
    }

    /// Same as [`Config::load`] with an explicit environment source.
    pub fn load_with(
        config_path: Option<String>,
        environment: Environment,
    ) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format())?
            .set_default("history.capacity", default_history_capacity() as u64)?
            .set_default(
                "recommendation.limit",
                RecommendationConfig::default().limit as u64,
            )?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(environment.separator("__").try_parsing(true));

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        self.logging.format()?;

        if self.history.capacity < 1 {
            return Err("History capacity must be at least 1".to_string());
        }
        if self.recommendation.limit < 1 {
            return Err("Recommendation limit must be at least 1".to_string());
        }
        if !self.recommendation.jitter.is_finite() || self.recommendation.jitter < 0.0 {
            return Err("Recommendation jitter must be a non-negative number".to_string());
        }
        Ok(())
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            history_capacity: self.history.capacity,
            recommendation: self.recommendation.clone(),
        }
    }
}
