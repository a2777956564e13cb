//! Configuration management from environment variables.

use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const DATA_DIR_VAR: &str = "HOTEL_DATA_DIR";
pub const CHANNEL_CAPACITY_VAR: &str = "HOTEL_CHANNEL_CAPACITY";

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidCapacity { var: &'static str, value: String },
}

/// Where the collections live and how many requests each actor queues.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Directory holding `customers.json`, `hotels.json` and `reservations.json`.
    pub data_dir: PathBuf,
    pub channel_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl StoreConfig {
    /// Reads `.env` if present, then the process environment, with defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(dir) = lookup(DATA_DIR_VAR).filter(|dir| !dir.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(value) = lookup(CHANNEL_CAPACITY_VAR) {
            config.channel_capacity = match value.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => capacity,
                _ => {
                    return Err(ConfigError::InvalidCapacity {
                        var: CHANNEL_CAPACITY_VAR,
                        value,
                    })
                }
            };
        }

        Ok(config)
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }
}
