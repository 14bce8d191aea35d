//! MediaCanvas Settings Crate
//!
//! Loads, validates, and persists the canvas and logging configuration.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{Config, LoggingSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use persistence::SettingsPersistence;
