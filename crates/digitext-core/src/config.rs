//! Configuration module
//!
//! Client configuration for the OCR API: base URL plus the small set of
//! tunables that bound uploads and polling. Values come from environment
//! variables with fixed defaults.

use std::env;
use std::time::Duration;

// Default tunables
const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const REQUEST_TIMEOUT_SECS: u64 = 300;
const POLL_INTERVAL_MS: u64 = 2_000;
const MAX_POLL_ATTEMPTS: u32 = 60;
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_BATCH_SIZE: usize = 10;

/// File extensions the intake validator accepts.
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "pdf"];

/// MIME types the intake validator accepts.
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "image/png",
    "image/jpeg",
    "image/jpg",
    "image/webp",
    "application/pdf",
];

/// Client configuration: the entire tunable surface of the OCR client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String,
    /// Per-request timeout enforced by the HTTP client.
    pub request_timeout: Duration,
    /// Constant delay between status polls.
    pub poll_interval: Duration,
    /// Attempt budget shared by non-terminal polls and transport failures.
    pub max_poll_attempts: u32,
    pub max_file_size_bytes: u64,
    pub max_batch_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            poll_interval: Duration::from_millis(POLL_INTERVAL_MS),
            max_poll_attempts: MAX_POLL_ATTEMPTS,
            max_file_size_bytes: MAX_FILE_SIZE_BYTES,
            max_batch_size: MAX_BATCH_SIZE,
        }
    }
}

impl ClientConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults. Reads DIGITEXT_API_URL (or API_URL) for the base URL and
    /// DIGITEXT_* overrides for the numeric tunables.
    pub fn from_env() -> Self {
        let base_url = env::var("DIGITEXT_API_URL")
            .or_else(|_| env::var("API_URL"))
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self {
            base_url,
            request_timeout: Duration::from_secs(
                parse_env("DIGITEXT_REQUEST_TIMEOUT_SECS", REQUEST_TIMEOUT_SECS),
            ),
            poll_interval: Duration::from_millis(parse_env(
                "DIGITEXT_POLL_INTERVAL_MS",
                POLL_INTERVAL_MS,
            )),
            max_poll_attempts: parse_env("DIGITEXT_MAX_POLL_ATTEMPTS", MAX_POLL_ATTEMPTS),
            max_file_size_bytes: parse_env("DIGITEXT_MAX_FILE_SIZE", MAX_FILE_SIZE_BYTES),
            max_batch_size: parse_env("DIGITEXT_MAX_BATCH_SIZE", MAX_BATCH_SIZE),
        }
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_service_contract() {
        let config = ClientConfig::default();
        assert_eq!(config.request_timeout, Duration::from_secs(300));
        assert_eq!(config.poll_interval, Duration::from_millis(2_000));
        assert_eq!(config.max_poll_attempts, 60);
        assert_eq!(config.max_file_size_bytes, 10 * 1024 * 1024);
        assert_eq!(config.max_batch_size, 10);
    }

    #[test]
    fn allowed_sets_cover_both_jpeg_spellings() {
        assert!(ALLOWED_EXTENSIONS.contains(&"jpg"));
        assert!(ALLOWED_EXTENSIONS.contains(&"jpeg"));
        assert!(ALLOWED_MIME_TYPES.contains(&"image/jpeg"));
        assert!(ALLOWED_MIME_TYPES.contains(&"image/jpg"));
    }
}
