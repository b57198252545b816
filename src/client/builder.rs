use crate::client::core::DeepSeekClient;
use crate::config::ClientConfig;
use crate::transport::{BlockingChatTransport, BlockingHttpTransport, ChatTransport, HttpTransport};
use crate::{DeepSeekError, Result};
use secrecy::SecretString;
use std::sync::Arc;
use std::time::Duration;

/// Builder for [`DeepSeekClient`].
///
/// Only `api_key` is required. Building never touches the network.
#[derive(Default)]
pub struct DeepSeekClientBuilder {
    api_key: Option<SecretString>,
    base_url: Option<String>,
    default_model: Option<String>,
    timeout: Option<Duration>,
    proxy_url: Option<String>,
    transport: Option<Arc<dyn BlockingChatTransport>>,
    async_transport: Option<Arc<dyn ChatTransport>>,
}

impl DeepSeekClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the builder from `DEEPSEEK_API_KEY` (required) and `DEEPSEEK_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("DEEPSEEK_API_KEY").map_err(|_| {
            DeepSeekError::configuration("api_key", "DEEPSEEK_API_KEY is not set")
        })?;
        let mut builder = Self::new().api_key(api_key);
        if let Some(base_url) = std::env::var("DEEPSEEK_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
        {
            builder = builder.base_url(base_url);
        }
        Ok(builder)
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Override the service endpoint (default `https://api.deepseek.com`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Model used by calls that do not name one (default `deepseek-chat`).
    pub fn default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = Some(model.into());
        self
    }

    /// Request timeout handed to the underlying HTTP clients.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn proxy_url(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    /// Replace the blocking handle used by the synchronous call styles.
    pub fn transport(mut self, transport: Arc<dyn BlockingChatTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the non-blocking handle used by the `async_*` call styles.
    pub fn async_transport(mut self, transport: Arc<dyn ChatTransport>) -> Self {
        self.async_transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<DeepSeekClient> {
        let api_key = self
            .api_key
            .ok_or_else(|| DeepSeekError::configuration("api_key", "an API key is required"))?;

        let config = ClientConfig::resolve(
            api_key,
            self.base_url,
            self.default_model,
            self.timeout,
            self.proxy_url,
        )?;

        let transport: Arc<dyn BlockingChatTransport> = match self.transport {
            Some(t) => t,
            None => Arc::new(BlockingHttpTransport::new(&config)?),
        };
        let async_transport: Arc<dyn ChatTransport> = match self.async_transport {
            Some(t) => t,
            None => Arc::new(HttpTransport::new(&config)?),
        };

        tracing::debug!(
            base_url = %config.base_url(),
            default_model = %config.default_model(),
            "built DeepSeek client"
        );

        Ok(DeepSeekClient {
            config: Arc::new(config),
            transport,
            async_transport,
        })
    }
}
