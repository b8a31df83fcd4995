//! Environment-based configuration.

use std::env;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a valid port number, got {value:?}")]
    InvalidPort { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
        }
    }
}

impl Config {
    /// Load `.env` (if present) and read settings from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(env::var("SERVER_HOST").ok(), env::var("SERVER_PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let server_port = match port {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidPort {
                name: "SERVER_PORT",
                value,
            })?,
            None => defaults.server_port,
        };

        Ok(Self {
            server_host: host.unwrap_or(defaults.server_host),
            server_port,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
