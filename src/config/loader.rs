//! Load `Config` from environment variables. `main` loads `.env` first.

use crate::config::{
    Config, DEFAULT_BODY_LIMIT_BYTES, DEFAULT_HOST, DEFAULT_MAX_CONNECTIONS, DEFAULT_PORT,
};
use crate::error::ConfigError;
use std::str::FromStr;

impl Config {
    /// | Env var                | Default    |
    /// |------------------------|------------|
    /// | `DB_CONNECTION_STRING` | (required) |
    /// | `HOST`                 | `0.0.0.0`  |
    /// | `PORT`                 | `3000`     |
    /// | `DB_MAX_CONNECTIONS`   | `5`        |
    /// | `BODY_LIMIT_BYTES`     | `1048576`  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DB_CONNECTION_STRING")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("DB_CONNECTION_STRING"))?;
        let host = lookup("HOST")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.into());
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        let body_limit_bytes = parse_or(&lookup, "BODY_LIMIT_BYTES", DEFAULT_BODY_LIMIT_BYTES)?;
        Ok(Config {
            database_url,
            host,
            port,
            max_connections,
            body_limit_bytes,
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}
