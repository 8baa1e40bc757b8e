pub mod config;
pub mod constants;

pub use config::{ConfigError, Settings, SettingsFile, TimeSettings, load_settings};
