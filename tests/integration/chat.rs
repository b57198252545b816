//! Non-streaming calls over HTTP

use crate::mock_server::{MockServerFixture, COMPLETION_BODY};
use deepseek::{ChatOptions, Message};
use mockito::Matcher;
use serde_json::json;

fn hello() -> Vec<Message> {
    vec![Message::user("Hello")]
}

#[test]
fn test_chat_completion_basic() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture
        .json_response(200, COMPLETION_BODY)
        .match_header("authorization", "Bearer test_key")
        .match_header("accept", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "model": "deepseek-chat",
            "messages": [{"role": "user", "content": "Hello"}],
            "temperature": 0.7,
            "stream": false
        })))
        .create();

    let resp = fixture
        .client()
        .chat_completion(hello(), ChatOptions::new())
        .expect("chat completion");

    assert_eq!(resp.content(), Some("Test response"));
    assert_eq!(resp.usage.as_ref().map(|u| u.total_tokens), Some(11));
    mock.assert();
}

#[test]
fn test_max_tokens_omitted_when_unset() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture
        .json_response(200, COMPLETION_BODY)
        .match_body(Matcher::Json(json!({
            "model": "deepseek-chat",
            "messages": [{"role": "user", "content": "Hello"}],
            "temperature": 0.7,
            "stream": false
        })))
        .create();

    fixture
        .client()
        .chat_completion(hello(), ChatOptions::new())
        .expect("chat completion");
    mock.assert();
}

#[test]
fn test_chat_completion_custom_params() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture
        .json_response(200, COMPLETION_BODY)
        .match_body(Matcher::PartialJson(json!({
            "model": "custom-model",
            "temperature": 0.5,
            "max_tokens": 100,
            "top_p": 0.9,
            "stop": ["END"]
        })))
        .create();

    fixture
        .client()
        .chat_completion(
            hello(),
            ChatOptions::new()
                .model("custom-model")
                .temperature(0.5)
                .max_tokens(100)
                .param("top_p", 0.9)
                .param("stop", json!(["END"])),
        )
        .expect("chat completion");
    mock.assert();
}

#[test]
fn test_named_extras_reach_the_body() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture
        .json_response(200, COMPLETION_BODY)
        .match_body(Matcher::Json(json!({
            "model": "deepseek-chat",
            "messages": [{"role": "user", "content": "Hello"}],
            "temperature": 0.1,
            "max_tokens": 50,
            "stream": false
        })))
        .create();

    fixture
        .client()
        .chat_completion(
            hello(),
            ChatOptions::new()
                .param("max_tokens", 50)
                .param("temperature", 0.1)
                .param("stream", true),
        )
        .expect("chat completion");
    mock.assert();
}

#[test]
fn test_configured_default_model_on_the_wire() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture
        .json_response(200, COMPLETION_BODY)
        .match_body(Matcher::PartialJson(json!({"model": "deepseek-coder"})))
        .create();

    fixture
        .client_with_model("deepseek-coder")
        .chat_completion(hello(), ChatOptions::new())
        .expect("chat completion");
    mock.assert();
}

#[tokio::test]
async fn test_async_chat_completion_basic() {
    let mut fixture = MockServerFixture::new_async().await;
    let mock = fixture
        .json_response(200, COMPLETION_BODY)
        .match_header("authorization", "Bearer test_key")
        .match_body(Matcher::PartialJson(json!({
            "model": "deepseek-chat",
            "messages": [
                {"role": "system", "content": "You are a helpful assistant."},
                {"role": "user", "content": "Hello, how are you?"}
            ],
            "temperature": 0.7,
            "stream": false
        })))
        .create_async()
        .await;

    let messages = vec![
        Message::system("You are a helpful assistant."),
        Message::user("Hello, how are you?"),
    ];
    let resp = fixture
        .client()
        .async_chat_completion(messages, ChatOptions::new())
        .await
        .expect("chat completion");

    assert_eq!(resp.id, "cmpl-1");
    assert_eq!(resp.choices[0].finish_reason.as_deref(), Some("stop"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_construction_does_no_io() {
    let mut fixture = MockServerFixture::new_async().await;
    let mock = fixture
        .json_response(200, COMPLETION_BODY)
        .expect(0)
        .create_async()
        .await;

    let client = fixture.client();
    assert_eq!(client.default_model(), "deepseek-chat");
    mock.assert_async().await;
}
