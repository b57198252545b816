use super::sse::{SseDecoder, SseEvent};
use super::{
    error_message_from_body, parse_chunk, BlockingChatTransport, ChatCompletionParams,
    RawChunkIter, TransportError,
};
use crate::config::ClientConfig;
use crate::types::{ChatCompletion, ChatCompletionChunk};
use crate::{DeepSeekError, Result};
use once_cell::sync::OnceCell;
use reqwest::header::ACCEPT;
use reqwest::Proxy;
use secrecy::{ExposeSecret, SecretString};
use std::io::{ErrorKind, Read};
use std::time::Duration;

/// Blocking chat-completion transport over `reqwest::blocking::Client`.
///
/// The reqwest client owns a private runtime thread, so it is built on first use
/// rather than at construction. A facade built inside an async runtime therefore
/// never creates it unless a synchronous call is made.
pub struct BlockingHttpTransport {
    client: OnceCell<reqwest::blocking::Client>,
    url: String,
    api_key: SecretString,
    timeout: Duration,
    proxy: Option<Proxy>,
}

impl BlockingHttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let proxy = config
            .proxy_url()
            .map(Proxy::all)
            .transpose()
            .map_err(|e| DeepSeekError::configuration("proxy_url", e.to_string()))?;

        Ok(Self {
            client: OnceCell::new(),
            url: config.chat_completions_url(),
            api_key: config.api_key().clone(),
            timeout: config.timeout(),
            proxy,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn client(&self) -> std::result::Result<&reqwest::blocking::Client, TransportError> {
        self.client.get_or_try_init(|| {
            let mut builder = reqwest::blocking::Client::builder()
                .timeout(self.timeout)
                .user_agent(super::user_agent())
                .pool_idle_timeout(Some(Duration::from_secs(90)));
            if let Some(proxy) = &self.proxy {
                builder = builder.proxy(proxy.clone());
            }
            builder.build().map_err(TransportError::Http)
        })
    }

    fn send(
        &self,
        params: &ChatCompletionParams,
    ) -> std::result::Result<reqwest::blocking::Response, TransportError> {
        let accept = if params.stream {
            "text/event-stream"
        } else {
            "application/json"
        };

        tracing::debug!(
            model = %params.model,
            stream = params.stream,
            messages = params.messages.len(),
            "sending chat completion request (blocking)"
        );

        let resp = self
            .client()?
            .post(&self.url)
            .bearer_auth(self.api_key.expose_secret())
            .header(ACCEPT, accept)
            .json(params)
            .send()?;

        let status = resp.status();
        tracing::debug!(status = status.as_u16(), "chat completion response");

        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                message: error_message_from_body(&body),
            });
        }

        Ok(resp)
    }
}

impl BlockingChatTransport for BlockingHttpTransport {
    fn create(
        &self,
        params: &ChatCompletionParams,
    ) -> std::result::Result<ChatCompletion, TransportError> {
        let resp = self.send(params)?;
        let body = resp.bytes()?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn create_stream(
        &self,
        params: &ChatCompletionParams,
    ) -> std::result::Result<RawChunkIter, TransportError> {
        let resp = self.send(params)?;
        Ok(Box::new(SseChunks::new(resp)))
    }
}

/// Pulls body bytes only when the caller asks for the next chunk.
struct SseChunks<R> {
    body: R,
    decoder: SseDecoder,
    buf: Vec<u8>,
    eof: bool,
}

impl<R: Read> SseChunks<R> {
    fn new(body: R) -> Self {
        Self {
            body,
            decoder: SseDecoder::new(),
            buf: vec![0; 8 * 1024],
            eof: false,
        }
    }
}

impl<R: Read> Iterator for SseChunks<R> {
    type Item = std::result::Result<ChatCompletionChunk, TransportError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.decoder.next_event() {
                Some(SseEvent::Data(data)) => return Some(parse_chunk(&data)),
                Some(SseEvent::Done) => {
                    self.eof = true;
                    return None;
                }
                None if self.eof || self.decoder.is_done() => return None,
                None => {}
            }

            match self.body.read(&mut self.buf) {
                Ok(0) => {
                    self.decoder.finish();
                    self.eof = true;
                }
                Ok(n) => self.decoder.push(&self.buf[..n]),
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => {
                    self.eof = true;
                    return Some(Err(TransportError::Io(e)));
                }
            }
        }
    }
}
