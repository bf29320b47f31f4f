//! Demo binary: send a chat completion request and print the JSON response.

use anyhow::Context;
use clap::Parser;
use poe::cli::{Cli, parse_message};
use poe::{API_KEY_VAR, ChatMessage, PoeClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let client = match PoeClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            eprintln!();
            eprintln!("Please set your {API_KEY_VAR} environment variable:");
            eprintln!("  export {API_KEY_VAR}=your_api_key_here");
            std::process::exit(1);
        }
    };

    let messages: Vec<ChatMessage> = cli.messages.iter().map(|m| parse_message(m)).collect();

    println!("Sending request to Poe API with model: {}", cli.model);
    println!("Messages: {}\n", serde_json::to_string_pretty(&messages)?);

    let response = client
        .chat_completion(&cli.model, messages)
        .await
        .context("Chat completion request failed")?;

    println!("Response:");
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
