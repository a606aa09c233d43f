use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where the directory service lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the directory service (e.g. `https://jsonplaceholder.typicode.com`).
    pub base_url: String,
    /// Collection path used both for listing and creating accounts.
    pub accounts_path: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://jsonplaceholder.typicode.com".to_string(),
            accounts_path: "/users".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    /// Creates a config pointing at `base_url` with default path and timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Full URL of the accounts collection.
    pub fn accounts_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.accounts_path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
