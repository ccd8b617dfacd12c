use std::env;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE_URL: &str = "./infinity.db";
pub const DEFAULT_PUBLIC_DIR: &str = "./public";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    /// Directory holding index.html, admin.html and assets.
    /// `None` when static serving is disabled.
    pub public_dir: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        // Set DISABLE_FRONTEND=1 to skip static file serving (for a separate dev server)
        let frontend_disabled = lookup("DISABLE_FRONTEND")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let public_dir = if frontend_disabled {
            None
        } else {
            Some(lookup("PUBLIC_DIR").unwrap_or_else(|| DEFAULT_PUBLIC_DIR.to_string()))
        };

        Ok(Self {
            port,
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            public_dir,
        })
    }
}
