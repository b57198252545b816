//! Integration tests for streaming responses

use crate::mock_server::{chunk_json, MockServerFixture};
use deepseek::{ChatOptions, Message};
use futures::StreamExt;
use mockito::Matcher;
use serde_json::json;

fn hello() -> Vec<Message> {
    vec![Message::user("Hello")]
}

fn hello_world() -> Vec<String> {
    vec![
        json!({
            "id": "cmpl-1",
            "choices": [{"index": 0, "delta": {"role": "assistant", "content": ""}}]
        })
        .to_string(),
        chunk_json("Hello"),
        chunk_json(" World"),
        "[DONE]".to_string(),
    ]
}

#[test]
fn test_stream_response() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture
        .sse_response(&hello_world())
        .match_header("accept", "text/event-stream")
        .match_body(Matcher::PartialJson(json!({"stream": true, "model": "deepseek-chat"})))
        .create();

    let chunks = fixture
        .client()
        .stream_response(hello(), ChatOptions::new())
        .expect("stream opens")
        .collect::<Result<Vec<_>, _>>()
        .expect("all chunks decode");

    let text: String = chunks.iter().filter_map(|c| c.delta_content()).collect();
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0].choices[0].delta.role.as_deref(), Some("assistant"));
    assert_eq!(text, "Hello World");
    mock.assert();
}

#[test]
fn test_stream_response_decode_failure_mid_stream() {
    let mut fixture = MockServerFixture::new();
    let _mock = fixture
        .sse_response(&[chunk_json("Hello"), "{broken".to_string(), chunk_json("late")])
        .create();

    let mut chunks = fixture
        .client()
        .stream_response(hello(), ChatOptions::new())
        .expect("stream opens");

    let first = chunks.next().expect("first item").expect("first chunk");
    assert_eq!(first.delta_content(), Some("Hello"));

    let err = chunks.next().expect("second item").unwrap_err();
    assert!(err.message().starts_with("API call failed"));
    assert!(err.message().contains("Decode error"));

    assert!(chunks.next().is_none());
}

#[tokio::test]
async fn test_async_stream_response() {
    let mut fixture = MockServerFixture::new_async().await;
    let mock = fixture
        .sse_response(&hello_world())
        .match_header("accept", "text/event-stream")
        .match_body(Matcher::PartialJson(json!({"stream": true, "temperature": 0.7})))
        .create_async()
        .await;

    let mut stream = fixture
        .client()
        .async_stream_response(hello(), ChatOptions::new())
        .await
        .expect("stream opens");

    let mut text = String::new();
    let mut count = 0;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.expect("chunk decodes");
        count += 1;
        text.push_str(chunk.delta_content().unwrap_or_default());
    }

    assert_eq!(count, 3);
    assert_eq!(text, "Hello World");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_keep_alive_comments_are_skipped() {
    let mut fixture = MockServerFixture::new_async().await;
    let _mock = fixture
        .sse_response(&[
            ": keep-alive".to_string(),
            chunk_json("Hi"),
            ": keep-alive".to_string(),
            "[DONE]".to_string(),
        ])
        .create_async()
        .await;

    let chunks: Vec<_> = fixture
        .client()
        .async_stream_response(hello(), ChatOptions::new())
        .await
        .expect("stream opens")
        .collect()
        .await;

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].as_ref().unwrap().delta_content(), Some("Hi"));
}

#[tokio::test]
async fn test_in_stream_error_payload() {
    let mut fixture = MockServerFixture::new_async().await;
    let _mock = fixture
        .sse_response(&[
            chunk_json("Hello"),
            json!({"error": {"message": "Content Exists Risk"}}).to_string(),
        ])
        .create_async()
        .await;

    let chunks: Vec<_> = fixture
        .client()
        .async_stream_response(hello(), ChatOptions::new())
        .await
        .expect("stream opens")
        .collect()
        .await;

    assert_eq!(chunks.len(), 2);
    assert!(chunks[0].is_ok());
    let err = chunks[1].as_ref().unwrap_err();
    assert!(err.message().contains("Content Exists Risk"));
}
