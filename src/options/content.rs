//! Blog content API settings.

use serde::{Deserialize, Serialize};
use web_time::Duration;

/// Where the blog feed lives and how long to wait for it.
///
/// A missing base URL is not an error: the content client degrades to an
/// empty feed and logs a warning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContentOptions {
    /// Base URL of the content API (e.g. "https://example.com").
    /// Falls back to the `CONTENT_API_URL` environment variable when unset.
    pub api_base_url: Option<String>,
    /// Global request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ContentOptions {
    fn default() -> Self {
        Self {
            api_base_url: None,
            timeout_ms: 10_000,
        }
    }
}

impl ContentOptions {
    /// Global request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
