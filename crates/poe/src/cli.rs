//! Command-line interface for the poe binary.

use clap::Parser;
use poe_core::ChatMessage;

/// Send a chat completion request to the Poe API and print the response.
#[derive(Debug, Parser)]
#[command(name = "poe", version, about)]
pub struct Cli {
    /// Model to query
    #[arg(long, default_value = "cole-bennet-gpt")]
    pub model: String,

    /// Conversation turn as `role:content`; bare text is sent as a user
    /// turn. Repeat the flag for a multi-turn conversation.
    #[arg(
        long = "message",
        value_name = "ROLE:CONTENT",
        default_value = "user:Hello world"
    )]
    pub messages: Vec<String>,
}

/// Parses a `role:content` argument into a [`ChatMessage`].
///
/// Only the three common role tags are recognized as prefixes; anything
/// else is treated as user content so that text containing a colon does
/// not get misread as a role.
pub fn parse_message(raw: &str) -> ChatMessage {
    match raw.split_once(':') {
        Some((role @ ("user" | "assistant" | "system"), content)) => {
            ChatMessage::new(role, content)
        }
        _ => ChatMessage::user(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_message;

    #[test]
    fn parses_role_prefixes() {
        let message = parse_message("assistant:Lighting matters.");
        assert_eq!(message.role, "assistant");
        assert_eq!(message.content, "Lighting matters.");
    }

    #[test]
    fn bare_text_becomes_a_user_turn() {
        let message = parse_message("Hello world");
        assert_eq!(message.role, "user");
        assert_eq!(message.content, "Hello world");
    }

    #[test]
    fn unknown_prefix_is_kept_as_content() {
        let message = parse_message("note: lighting matters");
        assert_eq!(message.role, "user");
        assert_eq!(message.content, "note: lighting matters");
    }
}
