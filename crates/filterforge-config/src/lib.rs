//! Configuration system for FilterForge.
//!
//! Load rewrite policies and logging settings from TOML or YAML files so that
//! search behavior can be tuned without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use filterforge_config::{EmptyCollectionPolicy, FilterForgeConfig};
//!
//! let config = FilterForgeConfig::from_toml_str(r#"
//!     [rewrite]
//!     empty_collection = "match_nothing"
//!
//!     [logging]
//!     level = "debug"
//! "#).unwrap();
//!
//! assert_eq!(config.rewrite.empty_collection, EmptyCollectionPolicy::MatchNothing);
//! assert!(!config.rewrite.replace_first_only);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use filterforge_config::FilterForgeConfig;
//!
//! let config = FilterForgeConfig::load("filterforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main FilterForge configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FilterForgeConfig {
    /// Metadata-driven rewrite policies.
    #[serde(default)]
    pub rewrite: RewriteConfig,

    /// Logging output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl FilterForgeConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the empty-collection policy.
    pub fn with_empty_collection(mut self, policy: EmptyCollectionPolicy) -> Self {
        self.rewrite.empty_collection = policy;
        self
    }

    /// Rewrites only the first equality filter found per attribute.
    pub fn with_replace_first_only(mut self, first_only: bool) -> Self {
        self.rewrite.replace_first_only = first_only;
        self
    }

    /// Sets the default log level.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = Some(level.into());
        self
    }

    /// Checks values serde cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logging.validate()
    }
}

/// Rewrite pass configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RewriteConfig {
    /// What to do with an equality filter whose value is an empty collection.
    #[serde(default)]
    pub empty_collection: EmptyCollectionPolicy,

    /// Rewrite only the first equality filter found for an attribute instead
    /// of every identical copy of it.
    #[serde(default)]
    pub replace_first_only: bool,
}

/// Handling of relation filters searching for an empty collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyCollectionPolicy {
    /// Remove the filter, leaving the attribute unconstrained.
    #[default]
    Drop,

    /// Replace the filter with one that matches nothing.
    MatchNothing,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Default level for FilterForge targets (`trace` .. `error`).
    ///
    /// `RUST_LOG` still takes precedence when set.
    pub level: Option<String>,
}

impl LoggingConfig {
    const LEVELS: [&'static str; 5] = ["trace", "debug", "info", "warn", "error"];

    /// Returns the configured level, or `info`.
    pub fn level_or_default(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match &self.level {
            Some(level) if !Self::LEVELS.contains(&level.to_ascii_lowercase().as_str()) => {
                Err(ConfigError::Invalid(format!(
                    "unknown log level '{}', expected one of {}",
                    level,
                    Self::LEVELS.join(", ")
                )))
            }
            _ => Ok(()),
        }
    }
}
