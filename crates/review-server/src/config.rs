use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::http::HeaderValue;

use review_api::cors::DEFAULT_ORIGINS;

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub addr: SocketAddr,
    pub cors_origins: Vec<HeaderValue>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path: PathBuf = lookup("REVIEW_DB_PATH")
            .unwrap_or_else(|| "./data/reviews.db".into())
            .into();
        let host = lookup("REVIEW_HOST").unwrap_or_else(|| "127.0.0.1".into());
        let port: u16 = lookup("REVIEW_PORT")
            .unwrap_or_else(|| "8000".into())
            .parse()
            .context("REVIEW_PORT must be a port number")?;
        let addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", host, port))?;

        let origins = lookup("REVIEW_CORS_ORIGINS").unwrap_or_else(|| DEFAULT_ORIGINS.join(","));
        let cors_origins = origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(|o| HeaderValue::from_str(o).with_context(|| format!("invalid CORS origin {:?}", o)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            db_path,
            addr,
            cors_origins,
        })
    }
}
