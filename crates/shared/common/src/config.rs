//! Shared configuration structures.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use domain::{ACTIVITY_CAPACITY, DEFAULT_ACTIVITY_FILE, DEFAULT_API_BASE_URL, REQUEST_TIMEOUT_MS};

/// Environment variable holding the remote users API base URL
pub const API_URL_ENV: &str = "DIRECTORY_API_URL";

/// Environment variable holding the activity feed file path
pub const ACTIVITY_PATH_ENV: &str = "DIRECTORY_ACTIVITY_PATH";

/// Remote users API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Fixed base URL. When `None` the environment is consulted on every call.
    pub base_url: Option<String>,
    /// Deadline applied to every remote call
    pub request_timeout: Duration,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// The base URL is left unresolved so that it is read per call; the
    /// deadline is always the fixed default.
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Configuration pinned to a fixed base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::default()
        }
    }

    /// Replace the request deadline. Only tests shorten it.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Resolve the base URL: explicit value, then environment, then `/api`.
    ///
    /// Trailing slashes are removed.
    pub fn resolve_base_url(&self) -> String {
        let raw = match &self.base_url {
            Some(url) => url.clone(),
            None => env::var(API_URL_ENV)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        };
        raw.trim_end_matches('/').to_string()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            request_timeout: Duration::from_millis(REQUEST_TIMEOUT_MS),
        }
    }
}

/// Activity feed persistence configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityConfig {
    /// File the feed is persisted to; `None` keeps it in memory only
    pub path: Option<PathBuf>,
    /// Maximum number of entries kept
    pub capacity: usize,
}

impl ActivityConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            path: Some(
                env::var(ACTIVITY_PATH_ENV)
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from(DEFAULT_ACTIVITY_FILE)),
            ),
            capacity: ACTIVITY_CAPACITY,
        }
    }

    /// In-memory feed (nothing written to disk).
    pub fn in_memory() -> Self {
        Self {
            path: None,
            capacity: ACTIVITY_CAPACITY,
        }
    }

    /// Feed persisted at `path`.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            capacity: ACTIVITY_CAPACITY,
        }
    }
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            path: Some(PathBuf::from(DEFAULT_ACTIVITY_FILE)),
            capacity: ACTIVITY_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_base_url_trims_trailing_slash() {
        let config = ApiConfig::with_base_url("http://localhost:4000/api/");
        assert_eq!(config.resolve_base_url(), "http://localhost:4000/api");
    }

    #[test]
    fn test_default_timeout_is_five_seconds() {
        assert_eq!(ApiConfig::default().request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_env_does_not_change_deadline() {
        assert_eq!(ApiConfig::from_env().request_timeout, Duration::from_millis(5_000));
        assert!(ApiConfig::from_env().base_url.is_none());
    }

    #[test]
    fn test_timeout_override() {
        let config = ApiConfig::with_base_url("http://x").timeout(Duration::from_millis(50));
        assert_eq!(config.request_timeout, Duration::from_millis(50));
    }

    #[test]
    fn test_activity_defaults() {
        let config = ActivityConfig::in_memory();
        assert!(config.path.is_none());
        assert_eq!(config.capacity, 20);
    }
}
