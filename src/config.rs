//! Configuration Module
//!
//! Handles loading and managing cache layer configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Which store implementation backs the cache client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// In-process store, useful for development and tests
    Memory,
    /// Redis server reached through a connection manager
    Redis,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "redis" => Ok(Self::Redis),
            other => Err(format!("unknown cache backend '{}'", other)),
        }
    }
}

/// Cache layer configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default TTL applied when `set` is called without one
    pub default_ttl: Duration,
    /// Store implementation to construct at startup
    pub backend: StoreBackend,
    pub redis_host: String,
    pub redis_port: u16,
    pub redis_password: Option<String>,
    pub redis_db: u32,
    /// HTTP server port
    pub server_port: u16,
    /// Interval in seconds between purges of expired in-memory entries
    pub purge_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL` - Default TTL in milliseconds (default: 60000)
    /// - `CACHE_BACKEND` - `memory` or `redis` (default: memory)
    /// - `REDIS_HOST` - Redis host (default: localhost)
    /// - `REDIS_PORT` - Redis port (default: 6379)
    /// - `REDIS_PASSWORD` - Redis password (default: none)
    /// - `REDIS_DB` - Redis database index (default: 0)
    /// - `SERVER_PORT` - HTTP server port (default: 3333)
    /// - `PURGE_INTERVAL` - Purge frequency in seconds (default: 1)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            default_ttl: env_parse::<u64>("CACHE_TTL")
                .map(Duration::from_millis)
                .unwrap_or(defaults.default_ttl),
            backend: env_parse("CACHE_BACKEND").unwrap_or(defaults.backend),
            redis_host: env::var("REDIS_HOST")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.redis_host),
            redis_port: env_parse("REDIS_PORT").unwrap_or(defaults.redis_port),
            redis_password: env::var("REDIS_PASSWORD").ok().filter(|v| !v.is_empty()),
            redis_db: env_parse("REDIS_DB").unwrap_or(defaults.redis_db),
            server_port: env_parse("SERVER_PORT").unwrap_or(defaults.server_port),
            purge_interval: env_parse("PURGE_INTERVAL").unwrap_or(defaults.purge_interval),
        }
    }

    /// Connection URL for the redis backend.
    pub fn redis_url(&self) -> String {
        match &self.redis_password {
            Some(password) => format!(
                "redis://:{}@{}:{}/{}",
                password, self.redis_host, self.redis_port, self.redis_db
            ),
            None => format!(
                "redis://{}:{}/{}",
                self.redis_host, self.redis_port, self.redis_db
            ),
        }
    }
}

fn env_parse<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl: Duration::from_millis(60_000),
            backend: StoreBackend::Memory,
            redis_host: "localhost".to_string(),
            redis_port: 6379,
            redis_password: None,
            redis_db: 0,
            server_port: 3333,
            purge_interval: 1,
        }
    }
}
