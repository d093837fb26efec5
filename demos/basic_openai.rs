//! Basic example of wrapping the OpenAI client with default parameters
//!
//! Run with `OPENAI_API_KEY` set; `RUST_LOG=llmwrap_core=debug` shows what the
//! wrapper forwards.

use llmwrap::prelude::*;
use llmwrap::OpenAIWrapper;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Reads OPENAI_API_KEY (and OPENAI_BASE_URL / OPENAI_ORG_ID if present)
    let client = OpenAIWrapper::from_env(
        Parameters::builder()
            .model("gpt-4o-mini")
            .max_tokens(200)
            .temperature(0.7)
            .build(),
    )?;

    for question in ["What is the capital of France?", "And of Japan?"] {
        let completion = client
            .chat()
            .completions()
            .create(Parameters::builder().messages([
                Message::system("You are a helpful assistant."),
                Message::user(question),
            ]))
            .await?;

        println!("Q: {question}\nA: {completion}");
        if let Some(usage) = completion.usage() {
            println!("   {usage}");
        }
    }

    // A single call can override any default
    let creative = client
        .chat()
        .completions()
        .create(
            Parameters::builder()
                .temperature(1.2)
                .messages([Message::user("Invent a word and define it.")]),
        )
        .await?;
    println!("{creative}");

    Ok(())
}
