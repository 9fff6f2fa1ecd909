use std::net::SocketAddr;

use thiserror::Error;

use tilestock_ai::DescriptionConfig;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid TILESTOCK_BIND '{value}': {reason}")]
    InvalidBind { value: String, reason: String },

    #[error("invalid TILESTOCK_SEED_DEMO '{0}' (expected true/false)")]
    InvalidSeedFlag(String),
}

/// Process configuration for the API binary.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind: SocketAddr,
    /// Start with the showroom demo records instead of an empty store.
    pub seed_demo: bool,
    pub descriptions: DescriptionConfig,
}

impl ApiConfig {
    /// Create config from environment variables.
    ///
    /// - `TILESTOCK_BIND`: listen address (default: `0.0.0.0:8080`)
    /// - `TILESTOCK_SEED_DEMO`: `true`/`false` (default: `true`)
    /// - description generator variables, see [`DescriptionConfig::from_env`]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_raw = lookup("TILESTOCK_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidBind {
                value: bind_raw.clone(),
                reason: e.to_string(),
            })?;

        let seed_demo = match lookup("TILESTOCK_SEED_DEMO") {
            None => true,
            Some(v) => parse_flag(&v).ok_or(ConfigError::InvalidSeedFlag(v))?,
        };

        Ok(Self {
            bind,
            seed_demo,
            descriptions: DescriptionConfig::from_lookup(&lookup),
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
