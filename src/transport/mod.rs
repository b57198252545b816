//! Underlying chat-completion transport.
//!
//! The facade never touches HTTP directly; it hands a [`ChatCompletionParams`] to one
//! of two handles:
//!
//! - [`ChatTransport`]: non-blocking, used by the `async_*` call styles
//! - [`BlockingChatTransport`]: blocking, used by the synchronous call styles
//!
//! [`HttpTransport`] and [`BlockingHttpTransport`] are the reqwest-backed
//! implementations. Anything implementing the traits can be injected through
//! [`crate::DeepSeekClientBuilder`].

mod blocking;
mod http;
pub(crate) mod sse;

pub use blocking::BlockingHttpTransport;
pub use http::HttpTransport;

use crate::types::{ChatCompletion, ChatCompletionChunk, Message};
use futures::Stream;
use serde::Serialize;
use serde_json::{Map, Value};
use std::pin::Pin;

/// Request body of a chat-completion call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionParams {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f64,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Additional named parameters, merged into the body unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Chunks produced by a non-blocking transport.
pub type RawChunkStream =
    Pin<Box<dyn Stream<Item = Result<ChatCompletionChunk, TransportError>> + Send + 'static>>;

/// Chunks produced by a blocking transport.
pub type RawChunkIter =
    Box<dyn Iterator<Item = Result<ChatCompletionChunk, TransportError>> + Send + 'static>;

#[async_trait::async_trait]
pub trait ChatTransport: Send + Sync {
    async fn create(&self, params: &ChatCompletionParams)
        -> Result<ChatCompletion, TransportError>;

    async fn create_stream(
        &self,
        params: &ChatCompletionParams,
    ) -> Result<RawChunkStream, TransportError>;
}

pub trait BlockingChatTransport: Send + Sync {
    fn create(&self, params: &ChatCompletionParams) -> Result<ChatCompletion, TransportError>;

    fn create_stream(&self, params: &ChatCompletionParams) -> Result<RawChunkIter, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Error object delivered inside a stream.
    #[error("API error: {0}")]
    Api(String),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Transport error: {0}")]
    Other(String),
}

/// Pull a human-readable message out of an OpenAI-style error body,
/// falling back to the raw body.
pub(crate) fn error_message_from_body(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(error_message_from_value)
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "empty response body".to_string()
            } else {
                trimmed.to_string()
            }
        })
}

pub(crate) fn error_message_from_value(json: &Value) -> Option<String> {
    let err = json.get("error").filter(|e| !e.is_null())?;
    match err {
        Value::String(s) => Some(s.clone()),
        _ => err
            .get("message")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .or_else(|| Some(err.to_string())),
    }
}

/// Decode one SSE `data:` payload into a chunk.
pub(crate) fn parse_chunk(data: &str) -> Result<ChatCompletionChunk, TransportError> {
    let value: Value = serde_json::from_str(data)?;
    if let Some(message) = error_message_from_value(&value) {
        return Err(TransportError::Api(message));
    }
    let chunk: ChatCompletionChunk = serde_json::from_value(value)?;
    tracing::trace!(id = %chunk.id, "decoded completion chunk");
    Ok(chunk)
}

pub(crate) fn user_agent() -> String {
    format!("deepseek-sdk-rust/{}", crate::VERSION)
}
