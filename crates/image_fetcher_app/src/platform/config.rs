use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use image_fetcher_engine::{EngineConfig, FetchSettings};
use serde::Deserialize;
use thiserror::Error;

use super::logging::LogDestination;

pub(crate) const CONFIG_FILENAME: &str = "image_fetcher.ron";

/// Optional overrides read from `image_fetcher.ron`; every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct FetcherConfig {
    pub output_dir: PathBuf,
    pub request_timeout_secs: u64,
    pub log_destination: LogDestination,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("Fetched_Images"),
            request_timeout_secs: 10,
            log_destination: LogDestination::File,
        }
    }
}

impl FetcherConfig {
    pub(crate) fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..FetchSettings::default()
        }
    }

    pub(crate) fn engine_config(&self) -> EngineConfig {
        let mut config = EngineConfig::default_with_output(self.output_dir.clone());
        config.fetch = self.fetch_settings();
        config
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("request_timeout_secs must be greater than zero")]
    ZeroTimeout,
}

/// Loads `image_fetcher.ron` from `dir`. A missing file yields the defaults.
pub(crate) fn load_config(dir: &Path) -> Result<FetcherConfig, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(FetcherConfig::default());
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    let config: FetcherConfig =
        ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
    if config.request_timeout_secs == 0 {
        return Err(ConfigError::ZeroTimeout);
    }
    Ok(config)
}
