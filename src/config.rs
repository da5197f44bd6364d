use std::net::SocketAddr;

use thiserror::Error;

use crate::domain::roster::TeamSize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Errors raised while reading configuration from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid ROSTER_BIND_ADDR '{0}': expected host:port")]
    InvalidBindAddr(String),

    #[error("Invalid ROSTER_DEFAULT_TEAM_SIZE '{0}': expected a whole number")]
    InvalidTeamSize(String),
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub default_team_size: TeamSize,
}

impl AppConfig {
    /// Reads configuration from process environment variables
    ///
    /// Call `dotenv::dotenv()` first to pick up a local `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = match lookup("ROSTER_BIND_ADDR") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr(raw.clone()))?,
            None => {
                tracing::warn!("ROSTER_BIND_ADDR not set, using default");
                DEFAULT_BIND_ADDR
                    .parse()
                    .map_err(|_| ConfigError::InvalidBindAddr(DEFAULT_BIND_ADDR.to_string()))?
            }
        };

        let default_team_size = match lookup("ROSTER_DEFAULT_TEAM_SIZE") {
            Some(raw) => {
                let (size, clamped) = TeamSize::parse(&raw)
                    .map_err(|_| ConfigError::InvalidTeamSize(raw.clone()))?;
                if clamped {
                    tracing::warn!(input = %raw, "Default team size below 1, clamped to 1");
                }
                size
            }
            None => TeamSize::default(),
        };

        Ok(Self {
            bind_addr,
            default_team_size,
        })
    }
}
