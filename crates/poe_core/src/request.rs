//! Request payload for chat completions.

use crate::ChatMessage;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::Serialize;

/// Chat completion request payload.
///
/// Serializes to `{"model": ..., "messages": [...]}` and nothing else;
/// message order is preserved verbatim.
///
/// # Examples
///
/// ```
/// use poe_core::{ChatMessage, ChatRequest};
///
/// let request = ChatRequest::builder()
///     .model("cole-bennet-gpt")
///     .messages(vec![ChatMessage::user("Hello world")])
///     .build()
///     .expect("Valid request");
///
/// assert_eq!(request.model(), "cole-bennet-gpt");
/// assert_eq!(request.messages().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatRequest {
    /// Model identifier
    model: String,
    /// Conversation messages, in turn order
    messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// Creates a new builder for ChatRequest.
    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::default()
    }
}
