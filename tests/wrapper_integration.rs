//! End-to-end tests: wrappers over the bundled providers, against a mock server

use llmwrap::prelude::*;
use llmwrap::providers::builder::{AnthropicBuilder, AzureBuilder, CompatibleBuilder, OpenAIBuilder};
use llmwrap::providers::{AnthropicConfig, OpenAI};
use llmwrap::{AnthropicWrapper, AzureOpenAIWrapper, OpenAICompatibleWrapper, OpenAIWrapper};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chat_response(content: &str) -> Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 5, "completion_tokens": 1, "total_tokens": 6}
    })
}

fn openai_wrapper(server: &MockServer, defaults: Parameters) -> OpenAIWrapper {
    let provider = OpenAIBuilder::new("sk-test")
        .base_url(format!("{}/v1", server.uri()))
        .build()
        .unwrap();
    Wrapper::from_instance(provider, defaults)
}

fn user_says(text: &str) -> Parameters {
    Parameters::builder().messages([Message::user(text)]).build()
}

#[test_log::test(tokio::test)]
async fn test_defaults_reach_the_wire() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_json(json!({
            "model": "gpt-4o",
            "max_completion_tokens": 1000,
            "messages": [{"role": "user", "content": "Hello"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response("Hi!")))
        .expect(1)
        .mount(&server)
        .await;

    let wrapper = openai_wrapper(
        &server,
        Parameters::builder().model("gpt-4o").max_tokens(1000).build(),
    );

    let completion = wrapper
        .chat()
        .completions()
        .create(user_says("Hello"))
        .await
        .unwrap();

    assert_eq!(completion.text().as_deref(), Some("Hi!"));
    assert_eq!(completion.raw(), &chat_response("Hi!"));
}

#[test_log::test(tokio::test)]
async fn test_overrides_win_per_call_only() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_json(json!({
            "model": "gpt-4o-mini",
            "temperature": 0.5,
            "messages": [{"role": "user", "content": "first"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response("one")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_json(json!({
            "model": "gpt-4o",
            "temperature": 0.2,
            "messages": [{"role": "user", "content": "second"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response("two")))
        .expect(1)
        .mount(&server)
        .await;

    let defaults = Parameters::builder().model("gpt-4o").temperature(0.2).build();
    let wrapper = openai_wrapper(&server, defaults.clone());

    let first = wrapper
        .create(user_says("first").with("model", "gpt-4o-mini").with("temperature", 0.5))
        .await
        .unwrap();
    let second = wrapper.create(user_says("second")).await.unwrap();

    assert_eq!(first.text().as_deref(), Some("one"));
    assert_eq!(second.text().as_deref(), Some("two"));
    assert_eq!(wrapper.defaults(), &defaults);
}

#[test_log::test(tokio::test)]
async fn test_provider_errors_pass_through() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "3")
                .set_body_json(json!({"error": {"message": "Slow down"}})),
        )
        .mount(&server)
        .await;

    let wrapper = openai_wrapper(&server, Parameters::new().with("model", "gpt-4o"));
    let err = wrapper.create(user_says("hi")).await.unwrap_err();

    assert_eq!(err.status(), Some(429));
    assert_eq!(err.retry_after(), Some(std::time::Duration::from_secs(3)));
    assert!(err.to_string().contains("Slow down"));
}

#[test_log::test(tokio::test)]
async fn test_anthropic_messages_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(body_json(json!({
            "model": "claude-3-5-haiku-latest",
            "max_tokens": 256,
            "system": "You are terse.",
            "messages": [{"role": "user", "content": "Hello"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "msg_1",
            "type": "message",
            "role": "assistant",
            "model": "claude-3-5-haiku-latest",
            "content": [{"type": "text", "text": "Hi."}],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 4, "output_tokens": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = AnthropicBuilder::new("ant-key").base_url(server.uri()).build().unwrap();
    let wrapper: AnthropicWrapper = Wrapper::from_instance(
        provider,
        Parameters::builder()
            .model("claude-3-5-haiku-latest")
            .set("max_completion_tokens", 256)
            .messages([Message::system("You are terse.")])
            .build(),
    );

    // messages is a top-level key: the call's list replaces the default one,
    // so the system prompt is passed again here
    let completion = wrapper
        .messages()
        .create(
            Parameters::builder()
                .messages([Message::system("You are terse."), Message::user("Hello")])
                .build(),
        )
        .await
        .unwrap();

    assert_eq!(completion.text().as_deref(), Some("Hi."));
    assert_eq!(completion.usage().map(|u| u.total_tokens), Some(5));
}

#[test_log::test(tokio::test)]
async fn test_azure_model_default_picks_deployment() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openai/deployments/prod-gpt4o/chat/completions"))
        .and(body_json(json!({"messages": [{"role": "user", "content": "Hi"}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response("azure")))
        .expect(1)
        .mount(&server)
        .await;

    let provider = AzureBuilder::new("key", server.uri()).build().unwrap();
    let wrapper: AzureOpenAIWrapper =
        Wrapper::from_instance(provider, Parameters::new().with("model", "prod-gpt4o"));

    let completion = wrapper.chat().completions().create(user_says("Hi")).await.unwrap();
    assert_eq!(completion.text().as_deref(), Some("azure"));
}

#[test_log::test(tokio::test)]
async fn test_stacked_wrappers_over_compatible_server() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_json(json!({
            "model": "team-model",
            "max_tokens": 64,
            "top_p": 0.9,
            "messages": [{"role": "user", "content": "Hi"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response("stacked")))
        .expect(1)
        .mount(&server)
        .await;

    let provider = CompatibleBuilder::new(format!("{}/v1", server.uri()))
        .build()
        .unwrap();
    let inner: OpenAICompatibleWrapper = Wrapper::from_instance(
        provider,
        Parameters::builder().model("base-model").max_tokens(64).build(),
    );
    let outer = Wrapper::from_instance(
        inner,
        Parameters::builder().model("team-model").top_p(0.9).build(),
    );

    let completion = outer.chat().completions().create(user_says("Hi")).await.unwrap();
    assert_eq!(completion.text().as_deref(), Some("stacked"));
}

#[test]
fn test_from_config_rejects_bad_configuration() {
    let err = Wrapper::<OpenAI>::from_config(
        OpenAIConfig::new("").with_base_url("https://api.openai.com/v1"),
        Parameters::new(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));

    let err = AnthropicWrapper::from_config(
        AnthropicConfig::new("key").with_base_url("not a url"),
        Parameters::new(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}

#[test]
fn test_defaults_from_json_config() {
    let defaults = Parameters::from_json_str(
        r#"{"model": "gpt-4o", "max_tokens": 1000, "response_format": {"type": "json_object"}}"#,
    )
    .unwrap();

    let wrapper = Wrapper::<OpenAI>::from_config(
        OpenAIConfig::new("sk-test").with_base_url("https://api.openai.com/v1"),
        defaults,
    )
    .unwrap();

    assert_eq!(wrapper.defaults().get_str("model"), Some("gpt-4o"));
    assert_eq!(wrapper.client().name(), "openai");
}
