//! Configuration Module
//!
//! Loads server and cache configuration from environment variables.
//! Missing or invalid values fall back to defaults; startup never fails
//! on configuration.

use std::env;
use std::str::FromStr;

use tracing::warn;

/// Default entry TTL: one hour.
pub const DEFAULT_CACHE_TTL_MS: u64 = 3_600_000;
/// Default cache capacity in entries.
pub const DEFAULT_CACHE_MAX_SIZE: usize = 1000;
pub const DEFAULT_POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

// == Cache Config ==
/// Fixed-at-construction parameters of a [`LookupCache`](crate::cache::LookupCache).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum entry age in milliseconds
    pub ttl_millis: u64,
    /// Maximum number of entries
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_millis: DEFAULT_CACHE_TTL_MS,
            capacity: DEFAULT_CACHE_MAX_SIZE,
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache entry TTL in milliseconds
    pub cache_ttl_ms: u64,
    /// Maximum number of cached lookups
    pub cache_max_size: usize,
    /// Background sweep interval in seconds, 0 = disabled
    pub cache_cleanup_interval: u64,
    /// Bind address
    pub host: String,
    /// HTTP server port
    pub port: u16,
    /// Base URL of the Pokemon lookup API
    pub pokeapi_base_url: String,
    /// Per-request lookup timeout in milliseconds
    pub pokeapi_timeout_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL` - Cache TTL in milliseconds (default: 3600000)
    /// - `CACHE_MAX_SIZE` - Maximum cached entries (default: 1000)
    /// - `CACHE_CLEANUP_INTERVAL` - Sweep interval in seconds, 0 disables (default: 0)
    /// - `HOST` - Bind address (default: 0.0.0.0)
    /// - `PORT` - HTTP server port (default: 3000)
    /// - `POKEAPI_BASE_URL` - Lookup API base URL (default: https://pokeapi.co/api/v2)
    /// - `POKEAPI_TIMEOUT_MS` - Lookup timeout in milliseconds (default: 5000)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let positive_u64 = |v: &u64| *v > 0;
        let positive_usize = |v: &usize| *v > 0;

        Self {
            cache_ttl_ms: parse_or(&lookup, "CACHE_TTL", defaults.cache_ttl_ms, positive_u64),
            cache_max_size: parse_or(
                &lookup,
                "CACHE_MAX_SIZE",
                defaults.cache_max_size,
                positive_usize,
            ),
            cache_cleanup_interval: parse_or(
                &lookup,
                "CACHE_CLEANUP_INTERVAL",
                defaults.cache_cleanup_interval,
                |_| true,
            ),
            host: lookup("HOST")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port, |_| true),
            pokeapi_base_url: lookup("POKEAPI_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.pokeapi_base_url),
            pokeapi_timeout_ms: parse_or(
                &lookup,
                "POKEAPI_TIMEOUT_MS",
                defaults.pokeapi_timeout_ms,
                positive_u64,
            ),
        }
    }

    /// Cache parameters derived from this configuration.
    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            ttl_millis: self.cache_ttl_ms,
            capacity: self.cache_max_size,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl_ms: DEFAULT_CACHE_TTL_MS,
            cache_max_size: DEFAULT_CACHE_MAX_SIZE,
            cache_cleanup_interval: 0,
            host: "0.0.0.0".to_string(),
            port: 3000,
            pokeapi_base_url: DEFAULT_POKEAPI_BASE_URL.to_string(),
            pokeapi_timeout_ms: 5000,
        }
    }
}

/// Parses `name` into `T`, keeping `default` when the variable is missing,
/// unparsable, or rejected by `valid`.
fn parse_or<T, F, V>(lookup: &F, name: &str, default: T, valid: V) -> T
where
    T: FromStr + std::fmt::Display,
    F: Fn(&str) -> Option<String>,
    V: Fn(&T) -> bool,
{
    let Some(raw) = lookup(name) else {
        return default;
    };

    match raw.trim().parse::<T>() {
        Ok(value) if valid(&value) => value,
        _ => {
            warn!("Invalid value {:?} for {}, using default {}", raw, name, default);
            default
        }
    }
}
