use crate::client::builder::DeepSeekClientBuilder;
use crate::client::options::ChatOptions;
use crate::config::ClientConfig;
use crate::transport::{BlockingChatTransport, ChatCompletionParams, ChatTransport};
use crate::types::{ChatCompletion, ChatCompletionChunk, Message};
use crate::{DeepSeekApiError, Result};
use futures::{future, Stream, StreamExt};
use std::pin::Pin;
use std::sync::Arc;

/// Result of one remote call.
pub type ApiResult<T> = std::result::Result<T, DeepSeekApiError>;

/// Chunks of a blocking streamed completion.
pub type ChunkIter = Box<dyn Iterator<Item = ApiResult<ChatCompletionChunk>> + Send + 'static>;

/// Chunks of a non-blocking streamed completion.
pub type ChunkStream =
    Pin<Box<dyn Stream<Item = ApiResult<ChatCompletionChunk>> + Send + 'static>>;

/// DeepSeek chat-completion client.
///
/// Holds two independent transport handles built from the same configuration: a
/// blocking one for [`chat_completion`](Self::chat_completion) and
/// [`stream_response`](Self::stream_response), and a non-blocking one for the
/// `async_*` variants. Every failure of the underlying call is returned as a
/// [`DeepSeekApiError`] carrying the original message.
///
/// Cloning is cheap; clones share the transport handles.
#[derive(Clone)]
pub struct DeepSeekClient {
    pub(crate) config: Arc<ClientConfig>,
    pub(crate) transport: Arc<dyn BlockingChatTransport>,
    pub(crate) async_transport: Arc<dyn ChatTransport>,
}

impl DeepSeekClient {
    /// Client with the default endpoint and model.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        DeepSeekClientBuilder::new().api_key(api_key).build()
    }

    pub fn builder() -> DeepSeekClientBuilder {
        DeepSeekClientBuilder::new()
    }

    /// Client configured from `DEEPSEEK_API_KEY` and, if set, `DEEPSEEK_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        DeepSeekClientBuilder::from_env()?.build()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn default_model(&self) -> &str {
        self.config.default_model()
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Blocking, non-streaming completion.
    pub fn chat_completion(
        &self,
        messages: Vec<Message>,
        options: ChatOptions,
    ) -> ApiResult<ChatCompletion> {
        let params = self.params(messages, options, false);
        self.transport
            .create(&params)
            .map_err(DeepSeekApiError::call_failed)
    }

    /// Non-blocking, non-streaming completion.
    pub async fn async_chat_completion(
        &self,
        messages: Vec<Message>,
        options: ChatOptions,
    ) -> ApiResult<ChatCompletion> {
        let params = self.params(messages, options, false);
        self.async_transport
            .create(&params)
            .await
            .map_err(DeepSeekApiError::call_failed)
    }

    /// Blocking, streaming completion.
    ///
    /// Failing to open the stream is returned here; a failure while reading is yielded
    /// as the last item of the iterator.
    pub fn stream_response(
        &self,
        messages: Vec<Message>,
        options: ChatOptions,
    ) -> ApiResult<ChunkIter> {
        let params = self.params(messages, options, true);
        let raw = self
            .transport
            .create_stream(&params)
            .map_err(DeepSeekApiError::call_failed)?;

        let chunks = raw
            .map(|item| item.map_err(DeepSeekApiError::call_failed))
            .scan(false, |failed, item| {
                if *failed {
                    return None;
                }
                *failed = item.is_err();
                Some(item)
            });
        Ok(Box::new(chunks))
    }

    /// Non-blocking, streaming completion.
    ///
    /// Failing to open the stream is returned here; a failure while reading is yielded
    /// as the last item of the stream.
    pub async fn async_stream_response(
        &self,
        messages: Vec<Message>,
        options: ChatOptions,
    ) -> ApiResult<ChunkStream> {
        let params = self.params(messages, options, true);
        let raw = self
            .async_transport
            .create_stream(&params)
            .await
            .map_err(DeepSeekApiError::call_failed)?;

        let chunks = raw
            .map(|item| item.map_err(DeepSeekApiError::call_failed))
            .scan(false, |failed, item| {
                if *failed {
                    return future::ready(None);
                }
                *failed = item.is_err();
                future::ready(Some(item))
            });
        Ok(Box::pin(chunks))
    }

    fn params(
        &self,
        messages: Vec<Message>,
        options: ChatOptions,
        stream: bool,
    ) -> ChatCompletionParams {
        let params = options.into_params(&self.config, messages, stream);
        tracing::debug!(
            model = %params.model,
            stream,
            max_tokens = ?params.max_tokens,
            extra = params.extra.len(),
            "chat completion call"
        );
        params
    }
}

impl std::fmt::Debug for DeepSeekClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeepSeekClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
