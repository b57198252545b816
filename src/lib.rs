//! # deepseek
//!
//! Thin client for the DeepSeek chat-completion API, which speaks the OpenAI wire
//! format. One client, four call styles, two error types.
//!
//! ## Overview
//!
//! - [`DeepSeekClient`] holds the configuration (API key, base URL, default model) and
//!   two transport handles, one blocking and one non-blocking.
//! - Every call forwards `model`, `messages`, `temperature`, an optional `max_tokens`
//!   and any extra named parameters, with `stream` fixed by the call style.
//! - Any failure of the underlying call surfaces as [`DeepSeekApiError`], which
//!   converts into the base [`DeepSeekError`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use deepseek::{ChatOptions, DeepSeekClient, Message};
//! use futures::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), deepseek::DeepSeekError> {
//!     let client = DeepSeekClient::new("your-api-key")?;
//!
//!     let messages = vec![
//!         Message::system("You are a helpful assistant."),
//!         Message::user("Hello, how are you?"),
//!     ];
//!
//!     let resp = client
//!         .async_chat_completion(messages.clone(), ChatOptions::new().max_tokens(256))
//!         .await?;
//!     println!("{}", resp.content().unwrap_or_default());
//!
//!     let mut stream = client
//!         .async_stream_response(messages, ChatOptions::new())
//!         .await?;
//!     while let Some(chunk) = stream.next().await {
//!         print!("{}", chunk?.delta_content().unwrap_or_default());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client facade, builder and per-call options |
//! | [`config`] | Client configuration and defaults |
//! | [`transport`] | Blocking and async HTTP transports |
//! | [`types`] | Messages and completion responses |
//! | [`prelude`] | The client and its two error types |

pub mod client;
pub mod config;
pub mod prelude;
pub mod transport;
pub mod types;

pub use client::{
    ApiResult, ChatOptions, ChunkIter, ChunkStream, DeepSeekClient, DeepSeekClientBuilder,
};
pub use config::ClientConfig;
pub use types::{ChatCompletion, ChatCompletionChunk, Message, MessageRole};

/// Crate version, sent in the user agent.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, DeepSeekError>;

/// Error types for the library
pub mod error;
pub use error::{DeepSeekApiError, DeepSeekError};
