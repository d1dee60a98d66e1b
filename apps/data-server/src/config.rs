//! Server configuration.

use std::env;

use anyhow::Context;
use axum::http::HeaderValue;

/// Origin allowed when `DATA_SERVER_CORS_ORIGINS` is not set.
pub const DEFAULT_CORS_ORIGIN: &str = "https://internship-profile.vercel.app";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Database URL.
    pub database_url: String,
    /// Maximum number of pooled database connections.
    pub max_connections: u32,
    /// Origins allowed to make credentialed cross-origin requests.
    pub cors_origins: Vec<HeaderValue>,
    /// Log level.
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = match get("DATABASE_URL") {
            Some(url) => url,
            None => mysql_url(&lookup)?,
        };

        let port = match get("DATA_SERVER_PORT") {
            Some(v) => v
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid DATA_SERVER_PORT: {v}"))?,
            None => 8080,
        };

        let max_connections = match get("DATA_SERVER_MAX_CONNECTIONS") {
            Some(v) => v
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .with_context(|| format!("Invalid DATA_SERVER_MAX_CONNECTIONS: {v}"))?,
            None => 5,
        };

        let cors_origins = match get("DATA_SERVER_CORS_ORIGINS") {
            Some(v) => parse_origins(&v)?,
            None => vec![HeaderValue::from_static(DEFAULT_CORS_ORIGIN)],
        };

        Ok(Self {
            host: get("DATA_SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            database_url,
            max_connections,
            cors_origins,
            log_level: get("DATA_SERVER_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Returns the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Builds a MySQL URL from the `DB_*` variables.
fn mysql_url(lookup: &impl Fn(&str) -> Option<String>) -> anyhow::Result<String> {
    let required = |key: &str| {
        lookup(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .with_context(|| format!("{key} is required when DATABASE_URL is not set"))
    };

    let user = required("DB_USER")?;
    let host = required("DB_HOST")?;
    let database = required("DB_DATABASE")?;
    // An empty password is a valid MySQL account setup.
    let password = lookup("DB_PASSWORD").unwrap_or_default();
    let port = match lookup("DB_PORT").filter(|v| !v.trim().is_empty()) {
        Some(v) => v
            .trim()
            .parse::<u16>()
            .with_context(|| format!("Invalid DB_PORT: {v}"))?,
        None => 3306,
    };

    Ok(format!(
        "mysql://{}:{}@{}:{}/{}",
        urlencoding::encode(&user),
        urlencoding::encode(&password),
        host,
        port,
        urlencoding::encode(&database),
    ))
}

/// Parses a comma-separated origin list.
fn parse_origins(value: &str) -> anyhow::Result<Vec<HeaderValue>> {
    let origins = value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            if origin == "*" {
                anyhow::bail!("Wildcard CORS origin cannot be used with credentials");
            }
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid CORS origin: {origin}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    if origins.is_empty() {
        anyhow::bail!("DATA_SERVER_CORS_ORIGINS contains no origins");
    }

    Ok(origins)
}
