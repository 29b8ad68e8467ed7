//! Deployment settings
//!
//! Resolution order (later wins):
//! 1. Built-in defaults
//! 2. TOML file (`--config`, or `~/.trivia/config.toml` when present)
//! 3. Environment (`DATABASE_URL`, `TRIVIA_BIND`, `TRIVIA_QUESTIONS_PER_PAGE`)
//!
//! CLI flags are applied on top by the binary.

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::pagination::DEFAULT_QUESTIONS_PER_PAGE;

/// Default bind address for the HTTP server
pub const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 5000);

/// Settings for one deployment of the trivia API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,
    /// PostgreSQL connection string
    pub database_url: Option<String>,
    /// Page size for `/pages/{n}/questions`; constant for the deployment
    pub questions_per_page: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(DEFAULT_BIND_ADDR),
            database_url: None,
            questions_per_page: DEFAULT_QUESTIONS_PER_PAGE,
        }
    }
}

impl Settings {
    /// Load settings from an explicit file, the default file if it exists,
    /// or defaults, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Self::config_path();
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        settings.apply_env()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Default config file path: ~/.trivia/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".trivia")
            .join("config.toml")
    }

    /// Parse settings from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CoreError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| CoreError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(url) = env::var("DATABASE_URL") {
            if !url.trim().is_empty() {
                self.database_url = Some(url);
            }
        }

        if let Ok(bind) = env::var("TRIVIA_BIND") {
            self.bind_addr = bind.parse().map_err(|_| CoreError::InvalidSetting {
                key: "bind_addr",
                reason: format!("'{}' is not a socket address", bind),
            })?;
        }

        if let Ok(per_page) = env::var("TRIVIA_QUESTIONS_PER_PAGE") {
            self.questions_per_page =
                per_page.parse().map_err(|_| CoreError::InvalidSetting {
                    key: "questions_per_page",
                    reason: format!("'{}' is not a positive integer", per_page),
                })?;
        }

        Ok(())
    }

    /// Reject settings the server cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.questions_per_page == 0 {
            return Err(CoreError::InvalidSetting {
                key: "questions_per_page",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
