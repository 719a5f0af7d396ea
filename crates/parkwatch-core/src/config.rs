//! Configuration loading and typed config structures.
//!
//! A host application keeps its Parkwatch settings in a YAML file such as:
//!
//! ```yaml
//! defaults:
//!   opening_hours: "7:00-20:00"
//!   ticket_type: single_day
//!   pass_type: individual
//! logging:
//!   level: debug
//!   json: false
//! ```
//!
//! Every section and field is optional; missing values fall back to the
//! defaults documented on each field.

use std::path::Path;

use parkwatch_types::{PassType, TicketType};
use serde::Deserialize;

/// Environment variable that overrides [`LoggingConfig::level`].
pub const LOG_LEVEL_ENV: &str = "PARKWATCH_LOG";

/// Opening hours used when a park is created without explicit hours.
pub const DEFAULT_OPENING_HOURS: &str = "8:00-18:00";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level Parkwatch configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ParkwatchConfig {
    /// Defaults applied when entities are created without explicit values.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ParkwatchConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// The `PARKWATCH_LOG` environment variable, when set, overrides
    /// `logging.level`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.logging.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// Unlike [`from_file`](Self::from_file) this does not consult the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Defaults for newly created parks, tickets, and passes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DefaultsConfig {
    /// Opening hours for new parks (default `"8:00-18:00"`).
    #[serde(default = "default_opening_hours")]
    pub opening_hours: String,

    /// Category for new tickets (default `single_day`).
    #[serde(default)]
    pub ticket_type: TicketType,

    /// Category for new annual passes (default `individual`).
    #[serde(default)]
    pub pass_type: PassType,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            opening_hours: default_opening_hours(),
            ticket_type: TicketType::default(),
            pass_type: PassType::default(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive (trace, debug, info, warn, error, or a full
    /// `EnvFilter` directive such as `parkwatch_model=debug`).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Override `level` with `PARKWATCH_LOG` when it is set.
    ///
    /// This is the only place the environment is read. Callers that build
    /// a config by hand instead of through
    /// [`ParkwatchConfig::from_file`] call it themselves.
    pub fn apply_env_overrides(&mut self) {
        self.override_level(std::env::var(LOG_LEVEL_ENV).ok());
    }

    /// Replace `level` with `value` if one is given.
    pub fn override_level(&mut self, value: Option<String>) {
        if let Some(level) = value {
            self.level = level;
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_opening_hours() -> String {
    DEFAULT_OPENING_HOURS.to_owned()
}

fn default_log_level() -> String {
    "info".to_owned()
}
