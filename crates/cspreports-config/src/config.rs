use crate::constants;
use chrono_tz::Tz;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),
}

/// How report timestamps relate to wall-clock time.
///
/// When `use_tz` is set, stored timestamps are UTC and cutoffs are localized
/// to `time_zone` before conversion. Otherwise timestamps are naive local time
/// in `time_zone`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSettings {
    pub use_tz: bool,
    pub time_zone: Tz,
}

impl Default for TimeSettings {
    fn default() -> Self {
        Self {
            use_tz: constants::DEFAULT_USE_TZ,
            time_zone: Tz::UTC,
        }
    }
}

/// Contents of an optional settings TOML file. Every key may be omitted.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SettingsFile {
    pub database_url: Option<String>,

    pub use_tz: Option<bool>,

    pub time_zone: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub database_url: Option<String>,
    pub time: TimeSettings,
}

impl SettingsFile {
    /// Layers environment overrides on top of the file and resolves the time
    /// zone name.
    pub fn resolve<F>(self, env: F) -> Result<Settings, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = env(constants::DATABASE_URL_ENV).or(self.database_url);

        let use_tz = env(constants::USE_TZ_ENV)
            .map(|v| parse_flag(&v))
            .or(self.use_tz)
            .unwrap_or(constants::DEFAULT_USE_TZ);

        let zone_name = env(constants::TIME_ZONE_ENV)
            .or(self.time_zone)
            .unwrap_or_else(|| constants::DEFAULT_TIME_ZONE.to_string());

        let time_zone = zone_name
            .parse::<Tz>()
            .map_err(|_| ConfigError::UnknownTimeZone(zone_name.clone()))?;

        Ok(Settings {
            database_url,
            time: TimeSettings { use_tz, time_zone },
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim(), "true" | "1" | "True" | "TRUE")
}

pub async fn read_settings_file(path: &Path) -> Result<SettingsFile, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads settings from defaults, an optional TOML file, then the process
/// environment.
pub async fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let file = match path {
        Some(path) => {
            tracing::debug!("Reading settings from {:?}", path);
            read_settings_file(path).await?
        }
        None => SettingsFile::default(),
    };

    file.resolve(|key| std::env::var(key).ok())
}
