//! Product lookup configuration.
//!
//! Settings are held in memory and handed to the lookup client at
//! construction time. Nothing is persisted; sessions are ephemeral.

use std::time::Duration;

/// Default product database host.
pub const DEFAULT_BASE_URL: &str = "https://world.openfoodfacts.org";

/// Settings for the product lookup client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    /// Base URL of the product database (scheme and host, no trailing path).
    pub base_url: String,

    /// Per-request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,

    /// User-Agent header sent with catalog requests.
    pub user_agent: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("scanledger/{}", env!("CARGO_PKG_VERSION"))
}

impl LookupConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the product database base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
