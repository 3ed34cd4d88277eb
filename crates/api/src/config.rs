//! Process configuration, read from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `LISTEN_ADDR` | `0.0.0.0:3001` | HTTP listen address |
//! | `DATABASE_URL` | `sqlite://db/useradmin.db` | SQLite database holding the `users` table |
//! | `ENSURE_SCHEMA` | `false` | create the `users` table at startup if missing |
//! | `TEMPLATE_DIR` | unset | directory of `list.html`/`edit.html`; built-in pages when unset |

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3001";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://db/useradmin.db";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must be true or false, got: {value}")]
    InvalidBool { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub database_url: String,
    pub ensure_schema: bool,
    pub template_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment, or a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddr {
                var: "LISTEN_ADDR",
                value: raw_addr.clone(),
            })?;

        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| {
            tracing::warn!("DATABASE_URL not set; using {DEFAULT_DATABASE_URL}");
            DEFAULT_DATABASE_URL.to_string()
        });

        let ensure_schema = match lookup("ENSURE_SCHEMA") {
            None => false,
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidBool {
                var: "ENSURE_SCHEMA",
                value: raw,
            })?,
        };

        let template_dir = lookup("TEMPLATE_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            listen_addr,
            database_url,
            ensure_schema,
            template_dir,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
