//! Runtime configuration from environment variables (optionally via `.env`)

use anyhow::{bail, Context};
use axum::http::HeaderValue;
use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};
use tracing::info;

use crate::models::is_currency_code;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// JSON offer catalog; the built-in catalog is used when unset
    pub offers_path: Option<PathBuf>,
    pub default_currency: String,
    pub quote_cache_capacity: u64,
    pub quote_cache_ttl: Duration,
    /// Allowed CORS origin for the booking form; any origin when unset
    pub cors_allow_origin: Option<String>,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_currency: String = try_load(&lookup, "DEFAULT_CURRENCY", "EUR")?;
        if !is_currency_code(&default_currency) {
            bail!("DEFAULT_CURRENCY must be a three-letter ISO code, got '{default_currency}'");
        }

        let ttl_secs: u64 = try_load(&lookup, "QUOTE_CACHE_TTL_SECS", "3600")?;
        if ttl_secs == 0 {
            bail!("QUOTE_CACHE_TTL_SECS must be positive");
        }

        let cors_allow_origin = optional(&lookup, "CORS_ALLOW_ORIGIN");
        if let Some(origin) = &cors_allow_origin {
            if HeaderValue::from_str(origin).is_err() {
                bail!("CORS_ALLOW_ORIGIN is not a valid header value: '{origin}'");
            }
        }

        Ok(Self {
            host: try_load(&lookup, "HOST", "0.0.0.0")?,
            port: try_load(&lookup, "PORT", "8080")?,
            offers_path: optional(&lookup, "OFFERS_PATH").map(PathBuf::from),
            default_currency,
            quote_cache_capacity: try_load(&lookup, "QUOTE_CACHE_CAPACITY", "10000")?,
            quote_cache_ttl: Duration::from_secs(ttl_secs),
            cors_allow_origin,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.trim().is_empty())
}

fn try_load<T, F>(lookup: &F, key: &str, default: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = optional(lookup, key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("Invalid {key} value: {raw}"))
}
