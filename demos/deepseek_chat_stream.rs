//! Real DeepSeek streaming example (no mock).
//!
//! Prerequisites:
//! - Set `DEEPSEEK_API_KEY`
//!
//! Run:
//!   DEEPSEEK_API_KEY=your_key cargo run --example deepseek_chat_stream

use deepseek::{ChatOptions, DeepSeekClient, Message};
use futures::StreamExt;
use std::io::Write;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if std::env::var("DEEPSEEK_API_KEY").is_err() {
        eprintln!("Error: DEEPSEEK_API_KEY environment variable is not set.");
        eprintln!("Run with: DEEPSEEK_API_KEY=your_key cargo run --example deepseek_chat_stream");
        std::process::exit(1);
    }

    let client = DeepSeekClient::from_env()?;

    let messages = vec![
        Message::system("You are a helpful assistant."),
        Message::user("Say hello in one short sentence, then list two numbers."),
    ];

    let mut stream = client
        .async_stream_response(messages, ChatOptions::new().temperature(0.2).max_tokens(128))
        .await?;

    let mut stdout = std::io::stdout();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if let Some(text) = chunk.delta_content() {
            write!(stdout, "{}", text)?;
            stdout.flush()?;
        }
        if let Some(usage) = &chunk.usage {
            println!("\n\n--- Usage ---\n{:#?}", usage);
        }
    }
    println!();

    Ok(())
}
