use std::env;

use thiserror::Error;
use tracing::info;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE: &str = "shopping";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("{0} must be set")]
    Missing(&'static str),
}

/// Where items are kept.
#[derive(Clone, Debug, PartialEq)]
pub enum StoreBackend {
    Mongo { uri: String, database: String },
    /// Process-local store, only when `ITEM_STORE=memory` asks for it.
    Memory,
}

/// Settings read from the process environment.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub port: u16,
    pub store: StoreBackend,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. Blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match var("PORT") {
            Some(value) => value.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::Invalid {
                    key: "PORT",
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => {
                info!("PORT not set, using default: {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        };

        let store = match var("ITEM_STORE").as_deref().map(str::trim) {
            None | Some("mongodb") => StoreBackend::Mongo {
                uri: var("MONGODB_URI").ok_or(ConfigError::Missing("MONGODB_URI"))?,
                database: var("MONGODB_DATABASE")
                    .unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            },
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "ITEM_STORE",
                    value: other.to_string(),
                    reason: "expected \"mongodb\" or \"memory\"".to_string(),
                })
            }
        };

        Ok(Self { port, store })
    }
}
