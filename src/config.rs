//! Runtime settings, collected once at startup from the environment.

use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// How partial updates treat fields in the request body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdatePolicy {
    /// Replace a field only when the body value is present and truthy.
    /// `0`, `""`, `null` and `false` are no-ops, matching the historical
    /// behavior this service is compatible with.
    #[default]
    Truthy,
    /// Replace a field whenever its key is present in the body; explicit
    /// `null` clears an optional field.
    Presence,
}

impl FromStr for UpdatePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "truthy" => Ok(UpdatePolicy::Truthy),
            "presence" => Ok(UpdatePolicy::Presence),
            other => Err(ConfigError::Invalid {
                var: "UPDATE_POLICY",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
    pub update_policy: UpdatePolicy,
}

impl AppConfig {
    /// Reads `DATABASE_URL`, `BIND_ADDR`, `PG_MAX_CONNECTIONS` and
    /// `UPDATE_POLICY`, with defaults for a local setup.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/catalog".into());
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
        let max_connections = match std::env::var("PG_MAX_CONNECTIONS") {
            Ok(v) => v.parse().map_err(|_| ConfigError::Invalid {
                var: "PG_MAX_CONNECTIONS",
                value: v,
            })?,
            Err(_) => 5,
        };
        let update_policy = match std::env::var("UPDATE_POLICY") {
            Ok(v) => v.parse()?,
            Err(_) => UpdatePolicy::default(),
        };
        Ok(AppConfig {
            database_url,
            bind_addr,
            max_connections,
            update_policy,
        })
    }
}
