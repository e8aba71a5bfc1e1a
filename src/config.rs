//! Runtime configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/books/v1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DATA_DIR_NAME: &str = ".bookfinder";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub data_dir: PathBuf,
    pub timeouts: HttpTimeouts,
}

impl Config {
    /// Build typed config from environment variables. Everything is optional:
    ///
    /// - `BOOKFINDER_BASE_URL`: book API base URL
    /// - `BOOKFINDER_DATA_DIR`: durable storage dir, default `$HOME/.bookfinder`
    ///   (current dir when `HOME` is unset)
    /// - `BOOKFINDER_REQUEST_TIMEOUT_SECS`: default 30
    /// - `BOOKFINDER_CONNECT_TIMEOUT_SECS`: default 10
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var("BOOKFINDER_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let data_dir = std::env::var("BOOKFINDER_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());
        let timeouts = HttpTimeouts {
            request_secs: env_parse_u64("BOOKFINDER_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("BOOKFINDER_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Self { base_url, data_dir, timeouts }
    }
}

fn default_data_dir() -> PathBuf {
    match std::env::var("HOME") {
        Ok(home) => PathBuf::from(home).join(DATA_DIR_NAME),
        Err(_) => PathBuf::from(DATA_DIR_NAME),
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
