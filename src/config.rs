use anyhow::{anyhow, Context, Result};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-001";
pub const DEFAULT_GEMINI_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TRANSLATE_BASE: &str = "https://translate.googleapis.com";

/// Runtime configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub gemini_base: String,
    pub translate_base: String,
    pub addr: SocketAddr,
    pub max_upload_bytes: usize,
    pub http_timeout: Duration,
    pub session_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("GOOGLE_API_KEY")
            .or_else(|| get("GEMINI_API_KEY"))
            .ok_or_else(|| anyhow!("GOOGLE_API_KEY must be set in the environment or .env file"))?;

        let host: IpAddr = get("HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string())
            .parse()
            .map_err(|e| anyhow!("HOST must be a valid IP address: {}", e))?;

        let port: u16 = get("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .context("PORT must be a valid number")?;

        let max_upload_mb: usize = get("MAX_UPLOAD_MB")
            .unwrap_or_else(|| "10".to_string())
            .parse()
            .context("MAX_UPLOAD_MB must be a whole number")?;

        let max_upload_bytes = max_upload_mb
            .checked_mul(1024 * 1024)
            .ok_or_else(|| anyhow!("MAX_UPLOAD_MB is too large: {}", max_upload_mb))?;

        let session_ttl_mins: u64 = get("SESSION_TTL_MINS")
            .unwrap_or_else(|| "60".to_string())
            .parse()
            .context("SESSION_TTL_MINS must be a whole number")?;

        let timeout_secs: u64 = get("HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|| "60".to_string())
            .parse()
            .context("HTTP_TIMEOUT_SECS must be a whole number")?;

        Ok(Self {
            api_key: api_key.trim().to_string(),
            model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_base: get("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE.to_string())
                .trim_end_matches('/')
                .to_string(),
            translate_base: get("TRANSLATE_API_BASE")
                .unwrap_or_else(|| DEFAULT_TRANSLATE_BASE.to_string())
                .trim_end_matches('/')
                .to_string(),
            addr: SocketAddr::new(host, port),
            max_upload_bytes,
            http_timeout: Duration::from_secs(timeout_secs),
            session_ttl: Duration::from_secs(session_ttl_mins.saturating_mul(60)),
        })
    }
}
