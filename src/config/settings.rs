//! Server settings from the environment (`.env` is loaded by the binary before this runs).

use crate::error::ConfigError;
use std::collections::HashMap;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    /// Create the database and tables on startup when missing.
    pub ensure_database: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&std::env::vars().collect())
    }

    /// Build from an explicit variable map. `DATABASE_URL` is required.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |key: &str| vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?.to_string();
        let host = get("HOST").unwrap_or(DEFAULT_HOST).to_string();
        let port = match get("PORT") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: v.to_string(),
            })?,
            None => DEFAULT_PORT,
        };
        let max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(v) => v
                .parse()
                .ok()
                .filter(|n: &u32| *n > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    key: "DB_MAX_CONNECTIONS",
                    value: v.to_string(),
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        let ensure_database = match get("ENSURE_DATABASE") {
            Some(v) => parse_bool(v).ok_or_else(|| ConfigError::Invalid {
                key: "ENSURE_DATABASE",
                value: v.to_string(),
            })?,
            None => true,
        };

        Ok(ServerConfig {
            database_url,
            host,
            port,
            max_connections,
            ensure_database,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
