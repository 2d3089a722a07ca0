//! Monday.com client for listing board items and resolving assets.

mod assets;
mod items;

use url::Url;

use crate::config::MondayClientConfig;
use crate::error::MondayResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::MondayConfig;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Monday.com client using the reqwest HTTP backend.
pub type DefaultMondayClient = MondayClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the Monday.com GraphQL API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultMondayClient` for production code and interact with it
/// through the `BoardSource` trait.
pub struct MondayClient<B: HttpBackend> {
    pub(crate) backend: B,
}

impl DefaultMondayClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails if the API URL is malformed or the HTTP client cannot be built.
    pub fn new(config: &MondayClientConfig) -> MondayResult<Self> {
        let internal_config = Self::to_internal_config(config)?;
        let backend = ReqwestBackend::new(internal_config)?;
        Ok(Self { backend })
    }

    fn to_internal_config(config: &MondayClientConfig) -> MondayResult<MondayConfig> {
        Ok(MondayConfig {
            api_url: Url::parse(&config.api_url)?,
            token: config.token.clone(),
            api_version: config.api_version.clone(),
            user_agent: config.user_agent.clone(),
            #[allow(clippy::cast_possible_truncation)] // Duration milliseconds won't exceed u64 in practice
            timeout_ms: config.timeout.as_millis() as u64,
            max_retries: config.max_retries,
            #[allow(clippy::cast_possible_truncation)]
            retry_base_delay_ms: config.retry_base_delay.as_millis() as u64,
        })
    }
}

impl<B: HttpBackend> MondayClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(backend: B) -> Self {
        Self { backend }
    }
}
