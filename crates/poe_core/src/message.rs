//! Message types for conversation history.

use serde::{Deserialize, Serialize};

/// A single turn in a conversation, in the chat completions format.
///
/// The role set is open-ended on the wire, so it stays a plain string
/// rather than an enum; the constructors cover the common tags.
///
/// # Examples
///
/// ```
/// use poe_core::ChatMessage;
///
/// let message = ChatMessage::user("Hello world");
///
/// assert_eq!(message.role, "user");
/// assert_eq!(message.content, "Hello world");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role tag, e.g. "system", "user", or "assistant"
    pub role: String,
    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Creates a new message with the given role and content.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Creates a message with the "user" role.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Creates a message with the "assistant" role.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }

    /// Creates a message with the "system" role.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }
}
