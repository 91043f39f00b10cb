//! Router configuration.
//!
//! Values come from, in increasing precedence:
//! 1. Built-in defaults
//! 2. An optional TOML file
//! 3. Environment variables (`PAYMENT_ROUTER_*`)

use crate::application::wiring::DEFAULT_PRIORITY;
use crate::domain::provider::PaymentProvider;
use crate::error::{PaymentError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Pretty-printed logs for humans
    #[default]
    Pretty,
    /// JSON logs for machine parsing
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Providers in the order their preference rules are consulted.
    pub priority: Vec<PaymentProvider>,
    /// Providers the factory may create clients for.
    pub enabled_providers: Vec<PaymentProvider>,
    pub logging: LoggingConfig,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            priority: DEFAULT_PRIORITY.to_vec(),
            enabled_providers: PaymentProvider::KNOWN.to_vec(),
            logging: LoggingConfig::default(),
        }
    }
}

impl RouterConfig {
    /// Loads configuration from a TOML file.
    ///
    /// `None` yields the defaults. A path that does not exist is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(PaymentError::ConfigError(format!(
                        "config file not found: {}",
                        p.display()
                    )));
                }
                let content = std::fs::read_to_string(p)?;
                Self::from_toml(&content)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PaymentError::ConfigError(e.to_string()))
    }

    /// Applies `PAYMENT_ROUTER_*` environment overrides.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(priority) = lookup("PAYMENT_ROUTER_PRIORITY") {
            self.priority = parse_provider_list(&priority)?;
        }
        if let Some(level) = lookup("PAYMENT_ROUTER_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("PAYMENT_ROUTER_LOG_FORMAT") {
            self.logging.format = format.parse::<LogFormat>().map_err(PaymentError::ConfigError)?;
        }
        Ok(self)
    }
}

/// Parses a comma-separated provider list. Blank entries are skipped.
fn parse_provider_list(value: &str) -> Result<Vec<PaymentProvider>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| entry.parse::<PaymentProvider>().map_err(PaymentError::ConfigError))
        .collect()
}
