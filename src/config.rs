//! User settings read from `~/.catworld/config.toml`.
//!
//! Every field is optional. Resolution order is built-in defaults, then the
//! file, then the `CATWORLD_SEED` / `CATWORLD_LOG` environment variables.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::BaseDirs;
use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

use crate::state::VolumeLevel;

/// Folder name used beneath the user's home directory for application data.
pub const DATA_DIR_NAME: &str = ".catworld";
const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_TOAST_SECONDS: u64 = 5;

pub const SEED_ENV: &str = "CATWORLD_SEED";
pub const LOG_ENV: &str = "CATWORLD_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Sparse on-disk representation.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub volume: Option<i64>,
    pub seed: Option<u64>,
    pub toast_seconds: Option<u64>,
    pub log_level: Option<String>,
}

/// Settings with every default filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub volume: VolumeLevel,
    pub seed: Option<u64>,
    pub toast_duration: Duration,
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            volume: VolumeLevel::default(),
            seed: None,
            toast_duration: Duration::from_secs(DEFAULT_TOAST_SECONDS),
            log_level: LevelFilter::Info,
        }
    }
}

impl Settings {
    /// One-line description of the effective settings for the log.
    pub fn summary(&self) -> String {
        format!(
            "volume {} seed {} toast {}s log {}",
            self.volume.get(),
            self.seed
                .map_or_else(|| "random".to_string(), |seed| seed.to_string()),
            self.toast_duration.as_secs(),
            self.log_level
        )
    }

    /// Fold a parsed file and environment lookups over the defaults.
    pub fn resolve<F>(file: FileConfig, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(volume) = file.volume {
            settings.volume = VolumeLevel::new(volume).map_err(|err| ConfigError::Invalid {
                field: "volume",
                reason: err.to_string(),
            })?;
        }
        if let Some(secs) = file.toast_seconds {
            settings.toast_duration = Duration::from_secs(secs);
        }
        settings.seed = file.seed;
        if let Some(level) = file.log_level {
            settings.log_level = parse_level("log_level", &level)?;
        }

        if let Some(raw) = env(SEED_ENV) {
            let seed = raw.trim().parse::<u64>().map_err(|err| ConfigError::Invalid {
                field: SEED_ENV,
                reason: err.to_string(),
            })?;
            settings.seed = Some(seed);
        }
        if let Some(level) = env(LOG_ENV) {
            settings.log_level = parse_level(LOG_ENV, &level)?;
        }

        Ok(settings)
    }
}

fn parse_level(field: &'static str, raw: &str) -> Result<LevelFilter, ConfigError> {
    raw.trim()
        .parse::<LevelFilter>()
        .map_err(|_| ConfigError::Invalid {
            field,
            reason: format!("unknown log level `{raw}`"),
        })
}

/// Absolute path of the application data directory inside the user's home.
pub fn data_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(DATA_DIR_NAME))
}

pub fn config_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Parse a config file. A missing file yields the empty config.
pub fn read_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load settings from the default location and the process environment.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let file = match config_path() {
        Some(path) => read_file_config(&path)?,
        None => FileConfig::default(),
    };
    Settings::resolve(file, |key| std::env::var(key).ok())
}
