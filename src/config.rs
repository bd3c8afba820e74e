use std::time::Duration;

use crate::error::ServiceError;

/// Connection settings for [`HttpPlayerDirectory`](crate::directory::HttpPlayerDirectory).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Base URL the `/players` path is appended to.
    pub base_url: String,
    /// Whole-request timeout; the fallback roster is used once it elapses.
    pub timeout: Duration,
    pub user_agent: String,
}

impl DirectoryConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a [`reqwest::Client`] honouring the timeout and user agent.
    pub fn build_client(&self) -> Result<reqwest::Client, ServiceError> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .build()
            .map_err(ServiceError::Client)
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            timeout: Duration::from_secs(5),
            user_agent: concat!("matchday/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
