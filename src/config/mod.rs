//! Configuration handling for the application.
//!
//! Values come from environment variables with development defaults. The
//! binaries call [`load_dotenv`] first, so a `.env` file in the working
//! directory can supply the same variables.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable names. Public so tests and scripts can refer to them.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_FETCH_TIMEOUT: &str = "FETCH_TIMEOUT";
pub const ENV_URL_LIMIT: &str = "URL_LIMIT";
pub const ENV_CHARGED_WORDS_DIRECTORY: &str = "CHARGED_WORDS_DIRECTORY";
pub const ENV_LEMMA_DICTIONARY: &str = "LEMMA_DICTIONARY";

/// Default development values used when environment variables are absent.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_FETCH_TIMEOUT_SECS: f64 = 3.0;
const DEFAULT_URL_LIMIT: usize = 10;
const DEFAULT_CHARGED_WORDS_DIRECTORY: &str = "charged_dict";

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    bind_addr: String,
    fetch_timeout: Duration,
    url_limit: usize,
    charged_words_directory: PathBuf,
    lemma_dictionary: Option<PathBuf>,
}

/// Errors that can occur while building a configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Loads `.env` from the working directory if present.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

impl Config {
    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let fetch_timeout = match env::var(ENV_FETCH_TIMEOUT) {
            Ok(raw) => parse_timeout(ENV_FETCH_TIMEOUT, &raw)?,
            Err(_) => Duration::from_secs_f64(DEFAULT_FETCH_TIMEOUT_SECS),
        };

        let url_limit = match env::var(ENV_URL_LIMIT) {
            Ok(raw) => parse_url_limit(&raw)?,
            Err(_) => DEFAULT_URL_LIMIT,
        };

        let charged_words_directory = env::var(ENV_CHARGED_WORDS_DIRECTORY)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CHARGED_WORDS_DIRECTORY));

        let lemma_dictionary = env::var(ENV_LEMMA_DICTIONARY)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            fetch_timeout,
            url_limit,
            charged_words_directory,
            lemma_dictionary,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Per-article fetch budget.
    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }
    /// Maximum number of URLs accepted in one request.
    pub fn url_limit(&self) -> usize {
        self.url_limit
    }
    pub fn charged_words_directory(&self) -> &Path {
        &self.charged_words_directory
    }
    /// Optional `form<TAB>lemma` dictionary; lowercasing is used without it.
    pub fn lemma_dictionary(&self) -> Option<&Path> {
        self.lemma_dictionary.as_deref()
    }

    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    pub fn with_charged_words_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.charged_words_directory = directory.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            fetch_timeout: Duration::from_secs_f64(DEFAULT_FETCH_TIMEOUT_SECS),
            url_limit: DEFAULT_URL_LIMIT,
            charged_words_directory: PathBuf::from(DEFAULT_CHARGED_WORDS_DIRECTORY),
            lemma_dictionary: None,
        }
    }
}

/// Parses a timeout in (possibly fractional) seconds.
pub fn parse_timeout(field: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    let seconds: f64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        field,
        reason: format!("expected seconds, got {raw:?}"),
    })?;
    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("timeout must be positive, got {raw:?}"),
        });
    }
    Ok(Duration::from_secs_f64(seconds))
}

fn parse_url_limit(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(ConfigError::InvalidValue {
            field: ENV_URL_LIMIT,
            reason: "limit must be at least 1".to_string(),
        }),
        Ok(limit) => Ok(limit),
        Err(_) => Err(ConfigError::InvalidValue {
            field: ENV_URL_LIMIT,
            reason: format!("expected a positive integer, got {raw:?}"),
        }),
    }
}
