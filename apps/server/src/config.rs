use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::{bail, Context};

use crate::auth::decode_secret_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => bail!("BB_LOG_FORMAT must be 'text' or 'json', got '{other}'"),
        }
    }
}

#[derive(Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub jwt_secret: Vec<u8>,
    pub token_ttl: Duration,
    pub log_format: LogFormat,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

impl Config {
    /// Reads `BB_*` variables, loading a `.env` file first when one exists.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = env_or("BB_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid BB_LISTEN_ADDR")?;
        let db_path = env_or("BB_DB_PATH", "./db/budgetbuddy.db");
        let cors_allow = env_or("BB_CORS_ALLOW_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = env_or("BB_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .context("Invalid BB_REQUEST_TIMEOUT_MS")?;
        let raw_secret = std::env::var("BB_JWT_SECRET").context("BB_JWT_SECRET must be set")?;
        let jwt_secret = decode_secret_key(&raw_secret)?;
        let token_ttl_secs: u64 = env_or("BB_TOKEN_TTL_SECS", "86400")
            .parse()
            .context("Invalid BB_TOKEN_TTL_SECS")?;
        if token_ttl_secs == 0 {
            bail!("BB_TOKEN_TTL_SECS must be greater than zero");
        }
        let log_format = env_or("BB_LOG_FORMAT", "text").parse()?;

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            jwt_secret,
            token_ttl: Duration::from_secs(token_ttl_secs),
            log_format,
        })
    }
}
