use std::env;
use std::fmt::Display;
use std::str::FromStr;

use anyhow::{anyhow, bail};
use dotenvy::dotenv;
use tracing::Level;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    /// No URL means the in-memory store
    pub database_url: Option<String>,
    pub db_max_connections: u32,

    // Rate limiting
    pub rate_api_per_min: u32,

    pub api_prefix: String,

    pub log_dir: String,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "0.0.0.0:8000".to_string(),
            database_url: None,
            db_max_connections: 10,
            rate_api_per_min: 1000,
            api_prefix: "/api".to_string(),
            log_dir: "logs".to_string(),
            log_level: Level::INFO,
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("{key} has an invalid value '{raw}': {e}")),
        None => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let config = Self {
            server_addr: lookup("SERVER_ADDR").unwrap_or(defaults.server_addr),
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", defaults.db_max_connections)?,
            rate_api_per_min: parse_or(&lookup, "RATE_API_PER_MIN", defaults.rate_api_per_min)?,
            api_prefix: lookup("API_PREFIX").unwrap_or(defaults.api_prefix),
            log_dir: lookup("LOG_DIR").unwrap_or(defaults.log_dir),
            log_level: parse_or(&lookup, "LOG_LEVEL", defaults.log_level)?,
        };

        if config.db_max_connections == 0 {
            bail!("DB_MAX_CONNECTIONS must be greater than 0");
        }
        if config.rate_api_per_min == 0 {
            bail!("RATE_API_PER_MIN must be greater than 0");
        }
        if !config.api_prefix.starts_with('/') {
            bail!("API_PREFIX must start with '/'");
        }

        Ok(config)
    }
}
