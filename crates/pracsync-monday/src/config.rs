//! Public configuration for the Monday.com client.
//!
//! This module provides a stable public API for configuring the board
//! client. The internal config is derived from this.

use std::time::Duration;

/// Monday.com GraphQL endpoint.
pub const DEFAULT_API_URL: &str = "https://api.monday.com/v2";

/// Configuration for the Monday.com client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use pracsync_monday::MondayClientConfig;
/// use std::time::Duration;
///
/// let config = MondayClientConfig::new("secret-token")
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct MondayClientConfig {
    /// GraphQL endpoint
    pub(crate) api_url: String,
    /// API token sent verbatim in the `Authorization` header
    pub(crate) token: String,
    /// Value of the `API-Version` header
    pub(crate) api_version: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Maximum number of retry attempts for transient errors
    pub(crate) max_retries: u8,
    /// Base delay for exponential backoff
    pub(crate) retry_base_delay: Duration,
}

impl MondayClientConfig {
    /// Create a new configuration with default settings and the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: token.into(),
            api_version: "2024-10".to_string(),
            user_agent: concat!("pracsync/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 0,
            retry_base_delay: Duration::from_millis(500),
        }
    }

    /// Set the GraphQL endpoint.
    ///
    /// Defaults to `https://api.monday.com/v2`.
    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Replace the API token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Set the `API-Version` header value.
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retry attempts for transient errors.
    ///
    /// Defaults to 0: a failed listing aborts the run immediately.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base delay for exponential backoff retries.
    ///
    /// Defaults to 500ms.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }
}
