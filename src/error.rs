use thiserror::Error;

/// Failure reported by the remote chat-completion call.
///
/// This is the only error the four call styles of [`crate::DeepSeekClient`] return.
/// It converts into [`DeepSeekError`], so `?` lifts it into the base error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DeepSeekApiError {
    message: String,
}

impl DeepSeekApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Wrap a lower-level failure, keeping its text in the message.
    pub(crate) fn call_failed(cause: impl std::fmt::Display) -> Self {
        Self::new(format!("API call failed: {}", cause))
    }
}

/// Base error for the library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeepSeekError {
    #[error("{0}")]
    Generic(String),

    /// Local misconfiguration detected while building a client.
    #[error("Configuration error: {field}: {message}")]
    Configuration { field: String, message: String },

    #[error(transparent)]
    Api(#[from] DeepSeekApiError),
}

impl DeepSeekError {
    pub fn new(message: impl Into<String>) -> Self {
        DeepSeekError::Generic(message.into())
    }

    pub fn configuration(field: impl Into<String>, message: impl Into<String>) -> Self {
        DeepSeekError::Configuration {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The human-readable message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            DeepSeekError::Generic(message) => message,
            DeepSeekError::Configuration { message, .. } => message,
            DeepSeekError::Api(e) => e.message(),
        }
    }

    pub fn as_api_error(&self) -> Option<&DeepSeekApiError> {
        match self {
            DeepSeekError::Api(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_api_error(&self) -> bool {
        self.as_api_error().is_some()
    }
}
