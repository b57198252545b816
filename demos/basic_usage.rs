//! Basic blocking usage.
//!
//! API key is read from `DEEPSEEK_API_KEY`; `DEEPSEEK_BASE_URL` optionally overrides the endpoint.
//!
//! Run:
//!   DEEPSEEK_API_KEY=your_key cargo run --example basic_usage

use deepseek::{ChatOptions, DeepSeekClient, DeepSeekError, Message};

fn main() -> Result<(), DeepSeekError> {
    tracing_subscriber::fmt::init();

    let client = DeepSeekClient::from_env()?;

    let messages = vec![
        Message::system("You are a helpful assistant."),
        Message::user("Hello! Explain what an SSE stream is in two sentences."),
    ];

    let resp = client.chat_completion(messages.clone(), ChatOptions::new().max_tokens(200))?;
    println!("Response:\n{}", resp.content().unwrap_or_default());
    if let Some(usage) = resp.usage {
        println!("\nUsage: {usage:?}");
    }

    println!("\nStreaming:");
    for chunk in client.stream_response(messages, ChatOptions::new().model("deepseek-chat"))? {
        print!("{}", chunk?.delta_content().unwrap_or_default());
    }
    println!();

    Ok(())
}
