//! Request and response types.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Message`] | Chat message with role and content |
//! | [`MessageRole`] | `system`, `user` or `assistant` |
//! | [`ChatCompletion`] | Non-streaming completion response |
//! | [`ChatCompletionChunk`] | One chunk of a streamed completion |

pub mod message;
pub mod response;

pub use message::{Message, MessageRole};
pub use response::{
    ChatCompletion, ChatCompletionChunk, Choice, ChunkChoice, Delta, ResponseMessage, Usage,
};
