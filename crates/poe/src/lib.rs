//! Unified public surface for the Poe API client.
//!
//! Re-exports the client, the wire types, and the error types so callers
//! can depend on this crate alone.

pub mod cli;

pub use poe_client::{API_KEY_VAR, DEFAULT_BASE_URL, PoeClient};
pub use poe_core::{ChatMessage, ChatRequest};
pub use poe_error::{ConfigurationError, RequestError};
