//! Wire-format data types for the Poe API client library.
//!
//! These types serialize to exactly the JSON the chat completions
//! endpoint expects; nothing is added or defaulted on the way out.

mod message;
mod request;

pub use message::ChatMessage;
pub use request::{ChatRequest, ChatRequestBuilder};
