//! Wrapping a local OpenAI-compatible server (vLLM, LM Studio, llama.cpp)
//!
//! Usage: `cargo run --example local_server -- http://localhost:8000/v1 my-model`

use llmwrap::prelude::*;
use llmwrap::providers::builder::CompatibleBuilder;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let base_url = args.next().unwrap_or_else(|| "http://localhost:8000/v1".to_string());
    let model = args.next().unwrap_or_else(|| "default".to_string());

    let provider = CompatibleBuilder::new(base_url).name("local").build()?;

    // Team-wide defaults, then per-application defaults stacked on top
    let team = Wrapper::from_instance(provider, Parameters::builder().model(model).max_tokens(256).build());
    let app = Wrapper::from_instance(team, Parameters::builder().temperature(0.1).build());

    let completion = app
        .chat()
        .completions()
        .create(Parameters::builder().messages([Message::user("Write a haiku about Rust.")]))
        .await?;

    println!("{completion}");
    Ok(())
}
