use super::sse::{SseDecoder, SseEvent};
use super::{
    error_message_from_body, parse_chunk, ChatCompletionParams, ChatTransport, RawChunkStream,
    TransportError,
};
use crate::config::ClientConfig;
use crate::types::ChatCompletion;
use crate::{DeepSeekError, Result};
use bytes::Bytes;
use futures::{stream, Stream, StreamExt};
use reqwest::header::ACCEPT;
use reqwest::Proxy;
use secrecy::{ExposeSecret, SecretString};
use std::pin::Pin;
use std::time::Duration;

type ByteStream = Pin<Box<dyn Stream<Item = reqwest::Result<Bytes>> + Send>>;

/// Non-blocking chat-completion transport over `reqwest::Client`.
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
    api_key: SecretString,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(super::user_agent())
            .pool_idle_timeout(Some(Duration::from_secs(90)));

        if let Some(proxy_url) = config.proxy_url() {
            let proxy = Proxy::all(proxy_url)
                .map_err(|e| DeepSeekError::configuration("proxy_url", e.to_string()))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| DeepSeekError::configuration("http_client", e.to_string()))?;

        Ok(Self {
            client,
            url: config.chat_completions_url(),
            api_key: config.api_key().clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn send(
        &self,
        params: &ChatCompletionParams,
    ) -> std::result::Result<reqwest::Response, TransportError> {
        let accept = if params.stream {
            "text/event-stream"
        } else {
            "application/json"
        };

        tracing::debug!(
            model = %params.model,
            stream = params.stream,
            messages = params.messages.len(),
            "sending chat completion request"
        );

        let resp = self
            .client
            .post(&self.url)
            .bearer_auth(self.api_key.expose_secret())
            .header(ACCEPT, accept)
            .json(params)
            .send()
            .await?;

        let status = resp.status();
        tracing::debug!(status = status.as_u16(), "chat completion response");

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                message: error_message_from_body(&body),
            });
        }

        Ok(resp)
    }
}

#[async_trait::async_trait]
impl ChatTransport for HttpTransport {
    async fn create(
        &self,
        params: &ChatCompletionParams,
    ) -> std::result::Result<ChatCompletion, TransportError> {
        let resp = self.send(params).await?;
        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn create_stream(
        &self,
        params: &ChatCompletionParams,
    ) -> std::result::Result<RawChunkStream, TransportError> {
        let resp = self.send(params).await?;
        let input: ByteStream = Box::pin(resp.bytes_stream());

        // Buffer body bytes and emit one chunk per complete SSE frame.
        let chunks = stream::unfold(
            (input, SseDecoder::new(), false),
            |(mut input, mut decoder, mut eof)| async move {
                loop {
                    match decoder.next_event() {
                        Some(SseEvent::Data(data)) => {
                            return Some((parse_chunk(&data), (input, decoder, eof)));
                        }
                        Some(SseEvent::Done) => return None,
                        None if eof || decoder.is_done() => return None,
                        None => {}
                    }

                    match input.next().await {
                        Some(Ok(bytes)) => decoder.push(&bytes),
                        Some(Err(e)) => {
                            return Some((Err(TransportError::Http(e)), (input, decoder, true)));
                        }
                        None => {
                            decoder.finish();
                            eof = true;
                        }
                    }
                }
            },
        );

        Ok(Box::pin(chunks))
    }
}
