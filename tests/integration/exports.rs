//! Package-level exports

#[test]
fn test_prelude_exports_client_and_errors() {
    use deepseek::prelude::*;

    let client = DeepSeekClient::new("test_api_key").expect("client");
    assert_eq!(client.default_model(), "deepseek-chat");

    let base = DeepSeekError::new("Test error");
    assert_eq!(base.to_string(), "Test error");

    let api = DeepSeekApiError::new("Test API error");
    let lifted: DeepSeekError = api.into();
    assert!(lifted.is_api_error());
}

#[test]
fn test_root_exports() {
    let err: Box<dyn std::error::Error> = Box::new(deepseek::DeepSeekApiError::new("x"));
    assert_eq!(err.to_string(), "x");
    let err: Box<dyn std::error::Error> = Box::new(deepseek::DeepSeekError::new("y"));
    assert_eq!(err.to_string(), "y");
}

#[test]
fn test_custom_base_url_and_model() {
    let client = deepseek::DeepSeekClient::builder()
        .api_key("test_api_key")
        .base_url("https://custom.api.com")
        .default_model("custom-model")
        .build()
        .expect("client");
    assert_eq!(client.base_url(), "https://custom.api.com");
    assert_eq!(client.default_model(), "custom-model");
}
