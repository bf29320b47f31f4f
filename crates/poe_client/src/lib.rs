//! HTTP client for the Poe chat completions API.
//!
//! One client, one operation: [`PoeClient::chat_completion`] sends a
//! model name and a conversation history to the endpoint and hands the
//! decoded JSON response back untouched.

mod client;

pub use client::{API_KEY_VAR, DEFAULT_BASE_URL, PoeClient};
