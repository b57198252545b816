//! The library's declared export list.
//!
//! `use deepseek::prelude::*;` brings in exactly the client and its two error types.

pub use crate::client::DeepSeekClient;
pub use crate::error::{DeepSeekApiError, DeepSeekError};
