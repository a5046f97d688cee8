//! Shared domain types for the BizAssist conversation engine.

use serde::{Deserialize, Serialize};

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

/// A product/option card rendered inside a bot message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionCard {
    pub title: String,
    pub detail: String,
}

/// Message body: plain text or a structured card list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Content {
    Text { text: String },
    Cards { cards: Vec<OptionCard> },
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Content::Text { text: text.into() }
    }

    /// Flatten the body to plain text, e.g. for prompt building.
    pub fn as_plain_text(&self) -> String {
        match self {
            Content::Text { text } => text.clone(),
            Content::Cards { cards } => cards
                .iter()
                .map(|c| format!("{}: {}", c.title, c.detail))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// A clickable suggestion chip attached to a bot message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub label: String,
    pub intent: Intent,
}

/// One transcript entry. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: Content,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Suggestion>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: Content::text(text),
            suggestions: Vec::new(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            content: Content::text(text),
            suggestions: Vec::new(),
        }
    }

    pub fn bot_with_suggestions(text: impl Into<String>, suggestions: Vec<Suggestion>) -> Self {
        Self {
            role: Role::Bot,
            content: Content::text(text),
            suggestions,
        }
    }

    pub fn bot_cards(cards: Vec<OptionCard>, suggestions: Vec<Suggestion>) -> Self {
        Self {
            role: Role::Bot,
            content: Content::Cards { cards },
            suggestions,
        }
    }
}

/// Target of keyword routing and suggestion-chip clicks.
///
/// Serialized with the same kebab-case tags the chip surface exposes
/// (`lang-en`, `toggle-ai`, `set-api-key`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intent {
    Hours,
    Location,
    Contact,
    Pricing,
    Compare,
    Returns,
    Payments,
    Ticket,
    Track,
    Assist,
    Lead,
    Qualify,
    Schedule,
    Browse,
    Agent,
    LangEn,
    LangEs,
    ToggleAi,
    SetApiKey,
    Marketing,
    Finance,
    Hr,
    Startup,
    Fallback,
    Unknown,
}

/// Pending multi-turn flow: the next raw input is consumed by this flow
/// instead of being routed as a fresh query. At most one is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    TicketDetails,
    OrderId,
    AssistDetails,
    LeadDetails,
    Budget,
    Slot,
}

/// Visitor profile captured by the lead flow. Replaced wholesale on
/// every capture; no merge semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
}

/// Supported catalog languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
}

impl Language {
    /// Persisted tag for this language.
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Parse a persisted tag; anything unrecognized falls back to English.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "es" => Language::Es,
            _ => Language::En,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

/// Session-scoped settings. Each field is independently persisted and
/// independently defaulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub language: Language,
    pub ai_enabled: bool,
    pub api_key: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            language: Language::En,
            ai_enabled: false,
            api_key: String::new(),
        }
    }
}

impl SessionSettings {
    /// Whether the AI delegate may be consulted at all.
    pub fn ai_ready(&self) -> bool {
        self.ai_enabled && !self.api_key.trim().is_empty()
    }
}

/// One fire-and-forget analytics entry. Append-only, never read back
/// by decision logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub event_name: String,
    pub timestamp_ms: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Bot).unwrap(), "\"bot\"");
    }

    #[test]
    fn test_intent_kebab_case_tags() {
        assert_eq!(serde_json::to_string(&Intent::LangEn).unwrap(), "\"lang-en\"");
        assert_eq!(serde_json::to_string(&Intent::ToggleAi).unwrap(), "\"toggle-ai\"");
        assert_eq!(
            serde_json::to_string(&Intent::SetApiKey).unwrap(),
            "\"set-api-key\""
        );
    }

    #[test]
    fn test_intent_roundtrip() {
        let intent: Intent = serde_json::from_str("\"track\"").unwrap();
        assert_eq!(intent, Intent::Track);
    }

    #[test]
    fn test_content_plain_text_passthrough() {
        let c = Content::text("hello");
        assert_eq!(c.as_plain_text(), "hello");
    }

    #[test]
    fn test_content_cards_flatten() {
        let c = Content::Cards {
            cards: vec![
                OptionCard {
                    title: "Electronics".into(),
                    detail: "Top sellers".into(),
                },
                OptionCard {
                    title: "Apparel".into(),
                    detail: "Shirts and shoes".into(),
                },
            ],
        };
        let flat = c.as_plain_text();
        assert!(flat.contains("Electronics: Top sellers"));
        assert!(flat.contains("Apparel: Shirts and shoes"));
    }

    #[test]
    fn test_message_serde_roundtrip() {
        let msg = Message::bot_with_suggestions(
            "Here are some things I can help with:",
            vec![Suggestion {
                label: "Track my order".into(),
                intent: Intent::Track,
            }],
        );
        let json = serde_json::to_string(&msg).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(msg, back);
    }

    #[test]
    fn test_message_without_suggestions_omits_field() {
        let msg = Message::user("hi");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(!json.contains("suggestions"));
    }

    #[test]
    fn test_language_tag_roundtrip() {
        assert_eq!(Language::from_tag(Language::Es.tag()), Language::Es);
        assert_eq!(Language::from_tag(Language::En.tag()), Language::En);
    }

    #[test]
    fn test_language_unknown_tag_defaults_to_english() {
        assert_eq!(Language::from_tag("fr"), Language::En);
        assert_eq!(Language::from_tag(""), Language::En);
    }

    #[test]
    fn test_settings_defaults() {
        let s = SessionSettings::default();
        assert_eq!(s.language, Language::En);
        assert!(!s.ai_enabled);
        assert!(s.api_key.is_empty());
    }

    #[test]
    fn test_ai_ready_requires_both() {
        let mut s = SessionSettings::default();
        assert!(!s.ai_ready());
        s.ai_enabled = true;
        assert!(!s.ai_ready());
        s.api_key = "sk-test".into();
        assert!(s.ai_ready());
        s.ai_enabled = false;
        assert!(!s.ai_ready());
    }

    #[test]
    fn test_ai_ready_whitespace_key_not_ready() {
        let s = SessionSettings {
            language: Language::En,
            ai_enabled: true,
            api_key: "   ".into(),
        };
        assert!(!s.ai_ready());
    }

    #[test]
    fn test_profile_roundtrip() {
        let p = Profile {
            name: "Ada".into(),
            email: "ada@example.com".into(),
        };
        let json = serde_json::to_string(&p).unwrap();
        let back: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
