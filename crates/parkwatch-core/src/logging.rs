//! Structured logging setup.
//!
//! The entity crate only emits `tracing` events. Whoever embeds it calls
//! [`init_logging`] once at startup to install a subscriber.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Errors that can occur while installing the global subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The configured level is not a valid filter directive.
    #[error("invalid log filter {directive:?}: {source}")]
    InvalidFilter {
        /// The rejected directive.
        directive: String,
        /// The underlying parse error.
        source: tracing_subscriber::filter::ParseError,
    },

    /// A global subscriber was already installed.
    #[error("failed to install tracing subscriber: {message}")]
    AlreadyInitialized {
        /// Description from `tracing-subscriber`.
        message: String,
    },
}

/// Build the filter for `config.level`.
///
/// The environment is not consulted here; `PARKWATCH_LOG` is folded into
/// the config by [`LoggingConfig::apply_env_overrides`].
///
/// # Errors
///
/// Returns [`LoggingError::InvalidFilter`] if the directive does not parse.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(&config.level).map_err(|source| LoggingError::InvalidFilter {
        directive: config.level.clone(),
        source,
    })
}

/// Install a global `fmt` subscriber configured by `config`.
///
/// # Errors
///
/// Returns [`LoggingError::InvalidFilter`] for a bad level and
/// [`LoggingError::AlreadyInitialized`] if called twice.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|err| LoggingError::AlreadyInitialized {
        message: err.to_string(),
    })?;

    tracing::debug!(level = %config.level, json = config.json, "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_levels_build_filters() {
        for level in ["info", "debug", "parkwatch_model=trace,warn"] {
            let config = LoggingConfig {
                level: level.to_owned(),
                json: false,
            };
            assert!(build_filter(&config).is_ok(), "{level} should parse");
        }
    }

    #[test]
    fn garbage_level_is_rejected() {
        let config = LoggingConfig {
            level: "parkwatch=verbose".to_owned(),
            json: false,
        };
        assert!(matches!(
            build_filter(&config),
            Err(LoggingError::InvalidFilter { directive, .. }) if directive == "parkwatch=verbose"
        ));
    }

    #[test]
    fn overridden_level_drives_the_filter() {
        let mut config = LoggingConfig {
            level: "parkwatch=verbose".to_owned(),
            json: false,
        };
        config.override_level(Some("debug".to_owned()));
        assert!(build_filter(&config).is_ok());
    }

    #[test]
    fn second_init_fails() {
        let config = LoggingConfig::default();
        let _first = init_logging(&config);
        assert!(init_logging(&config).is_err());
    }
}
