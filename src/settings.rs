//! Runtime settings from the environment (after `dotenvy` has loaded `.env`).

use crate::error::ConfigError;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use std::collections::HashMap;
use std::str::FromStr;

pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_MAX_CONNECTIONS: &str = "DATABASE_MAX_CONNECTIONS";
pub const ENV_SSL: &str = "DATABASE_SSL";

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub ssl_mode: PgSslMode,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars)
    }

    /// Build from an explicit variable map; unset or empty values take defaults.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |name: &str| vars.get(name).map(|s| s.trim()).filter(|s| !s.is_empty());

        let database_url = get(ENV_DATABASE_URL)
            .ok_or(ConfigError::Missing(ENV_DATABASE_URL))?
            .to_string();
        let host = get(ENV_HOST).unwrap_or("0.0.0.0").to_string();
        let port = parse_or(get(ENV_PORT), ENV_PORT, 3000)?;
        let max_connections = parse_or(get(ENV_MAX_CONNECTIONS), ENV_MAX_CONNECTIONS, 5)?;
        let ssl_mode = match get(ENV_SSL) {
            Some(v) => PgSslMode::from_str(v).map_err(|_| ConfigError::Invalid {
                name: ENV_SSL,
                value: v.to_string(),
            })?,
            None => PgSslMode::Prefer,
        };

        Ok(Settings {
            database_url,
            host,
            port,
            max_connections,
            ssl_mode,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        let opts = PgConnectOptions::from_str(&self.database_url).map_err(|_| ConfigError::Invalid {
            name: ENV_DATABASE_URL,
            value: "unparseable connection string".into(),
        })?;
        Ok(opts.ssl_mode(self.ssl_mode))
    }

    /// Shared pool; each request borrows one connection for one statement.
    pub async fn connect(&self) -> Result<PgPool, sqlx::Error> {
        let opts = self
            .connect_options()
            .map_err(|e| sqlx::Error::Configuration(Box::new(e)))?;
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .connect_with(opts)
            .await
    }
}

fn parse_or<T: FromStr>(value: Option<&str>, name: &'static str, default: T) -> Result<T, ConfigError> {
    match value {
        Some(v) => v.parse().map_err(|_| ConfigError::Invalid {
            name,
            value: v.to_string(),
        }),
        None => Ok(default),
    }
}
