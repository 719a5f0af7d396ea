//! Clock, configuration, and logging setup for the Parkwatch entity model.
//!
//! Nothing in here knows about parks or visitors. The entity crate takes a
//! [`Clock`] wherever it needs "now", and host applications use
//! [`config`] and [`logging`] to wire the model into their process.
//!
//! # Modules
//!
//! - [`clock`] -- The [`Clock`] trait with a wall-clock and a fixed,
//!   test-controlled implementation.
//! - [`config`] -- Configuration loading from YAML into strongly-typed
//!   structs.
//! - [`logging`] -- `tracing-subscriber` initialization from
//!   [`LoggingConfig`].
//!
//! [`Clock`]: clock::Clock
//! [`LoggingConfig`]: config::LoggingConfig

pub mod clock;
pub mod config;
pub mod logging;

pub use clock::{Clock, ClockError, FixedClock, SystemClock};
pub use config::{ConfigError, DefaultsConfig, LoggingConfig, ParkwatchConfig};
pub use logging::{LoggingError, init_logging};
