//! Anthropic through the wrapper, with a tool defined once in the defaults

use llmwrap::prelude::*;
use llmwrap::AnthropicWrapper;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let weather = ToolSchema::function("get_weather")
        .description("Get the current weather information for a specific location.")
        .param::<String>("location", "The location for which to get the weather.")
        .optional_param::<String>("unit", "'C' for Celsius, 'F' for Fahrenheit.", "C");

    // Reads ANTHROPIC_API_KEY; tools in chat-completions shape are rewritten
    // for the messages API
    let client = AnthropicWrapper::from_env(
        Parameters::builder()
            .model("claude-3-5-haiku-latest")
            .max_tokens(512)
            .tools([weather])
            .build(),
    )?;

    let completion = client
        .messages()
        .create(Parameters::builder().messages([
            Message::system("Use tools when they help."),
            Message::user("What's the weather in Paris?"),
        ]))
        .await?;

    for call in completion.tool_calls() {
        println!("tool call {}: {}({})", call.id, call.name, call.arguments);
    }
    if let Some(text) = completion.text() {
        println!("{text}");
    }
    println!("stop reason: {:?}", completion.finish_reason());

    Ok(())
}
