//! Terminal rendering of the conversation.

use bizassist_core::types::{Content, Message, Role};
use bizassist_chat::MessageSink;

/// Sink that prints each message to stdout as it lands in the transcript.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl MessageSink for ConsoleSink {
    fn push(&mut self, message: &Message) {
        let label = match message.role {
            Role::User => "you",
            Role::Bot => "bizassist",
        };
        match &message.content {
            Content::Text { text } => println!("{label}> {text}"),
            Content::Cards { cards } => {
                println!("{label}>");
                for card in cards {
                    println!("    * {} — {}", card.title, card.detail);
                }
            }
        }
        if !message.suggestions.is_empty() {
            let labels: Vec<&str> = message
                .suggestions
                .iter()
                .map(|s| s.label.as_str())
                .collect();
            println!("    [{}]", labels.join("] ["));
        }
    }

    fn transient(&mut self, text: &str) {
        println!("... {text}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizassist_core::types::Suggestion;

    // Rendering goes to stdout; these only check nothing panics.
    #[test]
    fn test_push_text_and_cards() {
        let mut sink = ConsoleSink;
        sink.push(&Message::user("hello"));
        sink.push(&Message::bot_with_suggestions(
            "options",
            vec![Suggestion {
                label: "Browse products".into(),
                intent: bizassist_core::types::Intent::Browse,
            }],
        ));
        sink.transient("Thinking...");
    }
}
