//! Client configuration.
//!
//! A [`ClientConfig`] is built once by [`crate::DeepSeekClientBuilder`] and never changes
//! afterwards. Transport-level knobs (timeout, proxy) fall back to environment variables
//! when left unset:
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `DEEPSEEK_HTTP_TIMEOUT_SECS` | per-request timeout of the underlying HTTP client |
//! | `DEEPSEEK_PROXY_URL` | proxy for all requests |

use std::env;
use std::time::Duration;

use secrecy::SecretString;

use crate::{DeepSeekError, Result};

/// Public DeepSeek endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";

/// Model used when a call does not name one.
pub const DEFAULT_MODEL: &str = "deepseek-chat";

/// Sampling temperature used when a call does not set one.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

const DEFAULT_TIMEOUT_SECS: u64 = 600;

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub(crate) api_key: SecretString,
    pub(crate) base_url: String,
    pub(crate) default_model: String,
    pub(crate) timeout: Duration,
    pub(crate) proxy_url: Option<String>,
}

impl ClientConfig {
    /// Resolve a configuration, filling unset transport knobs from the environment.
    pub(crate) fn resolve(
        api_key: SecretString,
        base_url: Option<String>,
        default_model: Option<String>,
        timeout: Option<Duration>,
        proxy_url: Option<String>,
    ) -> Result<Self> {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let parsed = url::Url::parse(&base_url)
            .map_err(|e| DeepSeekError::configuration("base_url", e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DeepSeekError::configuration(
                "base_url",
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }

        let timeout = timeout.unwrap_or_else(|| {
            Duration::from_secs(
                env::var("DEEPSEEK_HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            )
        });
        let proxy_url = proxy_url.or_else(|| {
            env::var("DEEPSEEK_PROXY_URL")
                .ok()
                .filter(|s| !s.trim().is_empty())
        });

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            default_model: default_model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout,
            proxy_url,
        })
    }

    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn proxy_url(&self) -> Option<&str> {
        self.proxy_url.as_deref()
    }

    /// Full URL of the chat-completion endpoint.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}
