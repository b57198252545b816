//! DeepSeek client facade.
//!
//! Four call styles over one configuration:
//!
//! | Method | Blocking | Streaming |
//! |--------|----------|-----------|
//! | [`DeepSeekClient::chat_completion`] | yes | no |
//! | [`DeepSeekClient::async_chat_completion`] | no | no |
//! | [`DeepSeekClient::stream_response`] | yes | yes |
//! | [`DeepSeekClient::async_stream_response`] | no | yes |

pub mod builder;
pub mod core;
pub mod options;

pub use self::builder::DeepSeekClientBuilder;
pub use self::core::{ApiResult, ChunkIter, ChunkStream, DeepSeekClient};
pub use self::options::ChatOptions;
