//! Keyword intent router.
//!
//! Ordered first-match table over lowercase substring tests. Earlier
//! rules win, so narrow intents (hours, location) sit above broad ones
//! and overlapping keywords resolve deterministically.

use bizassist_core::types::Intent;

/// Ordered routing table. Each entry is matched by lowercase substring;
/// the first rule with any keyword hit decides the intent.
const RULES: &[(&[&str], Intent)] = &[
    (&["hours"], Intent::Hours),
    (&["location"], Intent::Location),
    (&["contact"], Intent::Contact),
    (&["price", "package"], Intent::Pricing),
    (&["return", "ship"], Intent::Returns),
    (&["pay"], Intent::Payments),
    (&["track", "order"], Intent::Track),
    (&["ticket", "issue", "support"], Intent::Ticket),
    (&["demo", "book", "schedule"], Intent::Schedule),
    (&["agent", "human"], Intent::Agent),
    (&["compare", "standard", "premium"], Intent::Compare),
    (&["marketing"], Intent::Marketing),
    (&["finance", "invest"], Intent::Finance),
    (&["hr", "hiring", "onboarding"], Intent::Hr),
    (&["startup"], Intent::Startup),
];

/// Broad business vocabulary used only to pick between the two fallback
/// replies. Kept disjoint from the routing keywords above so a hit here
/// means no rule already claimed the message.
const BUSINESS_WORDS: &[&str] = &[
    "business", "revenue", "sales", "customer", "strategy", "growth", "profit", "invoice", "tax",
    "legal", "employee", "salary", "brand", "advertis", "campaign", "budget", "market", "plan",
    "service", "vendor", "supplier",
];

#[derive(Debug, Default)]
pub struct IntentRouter;

impl IntentRouter {
    pub fn new() -> Self {
        Self
    }

    /// Route a raw message to an intent. Never fails: unmatched input
    /// routes to [`Intent::Fallback`].
    pub fn route(&self, message: &str) -> Intent {
        let lowered = message.to_lowercase();
        for (keywords, intent) in RULES {
            if keywords.iter().any(|kw| lowered.contains(kw)) {
                return *intent;
            }
        }
        Intent::Fallback
    }

    /// Whether an unrouted message still reads like a business question,
    /// which selects the business-flavored fallback reply.
    pub fn is_business_query(&self, message: &str) -> bool {
        let lowered = message.to_lowercase();
        BUSINESS_WORDS.iter().any(|kw| lowered.contains(kw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(msg: &str) -> Intent {
        IntentRouter::new().route(msg)
    }

    #[test]
    fn test_hours_question() {
        assert_eq!(route("What are your hours today?"), Intent::Hours);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(route("LOCATION please"), Intent::Location);
        assert_eq!(route("How do I CONTACT you"), Intent::Contact);
    }

    #[test]
    fn test_substring_matches_inside_words() {
        // "shipping" contains "ship", "payment" contains "pay".
        assert_eq!(route("what about shipping?"), Intent::Returns);
        assert_eq!(route("which payment methods?"), Intent::Payments);
    }

    #[test]
    fn test_first_rule_wins_on_overlap() {
        // "price" (Pricing) appears before "compare" (Compare).
        assert_eq!(route("compare your prices"), Intent::Pricing);
        // "track" (Track) appears before "support" (Ticket).
        assert_eq!(route("track my support request"), Intent::Track);
    }

    #[test]
    fn test_order_routes_to_track() {
        assert_eq!(route("where is my order"), Intent::Track);
    }

    #[test]
    fn test_ticket_keywords() {
        assert_eq!(route("I have an issue"), Intent::Ticket);
        assert_eq!(route("open a ticket"), Intent::Ticket);
        assert_eq!(route("need support"), Intent::Ticket);
    }

    #[test]
    fn test_schedule_keywords() {
        assert_eq!(route("book a demo"), Intent::Schedule);
        assert_eq!(route("can I schedule something"), Intent::Schedule);
    }

    #[test]
    fn test_agent_keywords() {
        assert_eq!(route("get me a human"), Intent::Agent);
        assert_eq!(route("talk to an agent"), Intent::Agent);
    }

    #[test]
    fn test_compare_without_price_words() {
        assert_eq!(route("standard vs premium?"), Intent::Compare);
    }

    #[test]
    fn test_topic_rules() {
        assert_eq!(route("any marketing advice?"), Intent::Marketing);
        assert_eq!(route("should I invest?"), Intent::Finance);
        assert_eq!(route("tips on hiring"), Intent::Hr);
        assert_eq!(route("I'm building a startup"), Intent::Startup);
    }

    #[test]
    fn test_unmatched_falls_back() {
        assert_eq!(route("tell me a joke"), Intent::Fallback);
        assert_eq!(route(""), Intent::Fallback);
    }

    #[test]
    fn test_business_query_detection() {
        let router = IntentRouter::new();
        assert!(router.is_business_query("how do I grow revenue"));
        assert!(router.is_business_query("advertising on a small BUDGET"));
        assert!(!router.is_business_query("tell me a joke"));
    }

    #[test]
    fn test_business_words_disjoint_from_rules() {
        // Every business word must route to Fallback on its own, or the
        // two-tier fallback would be unreachable for it.
        let router = IntentRouter::new();
        for word in super::BUSINESS_WORDS {
            assert_eq!(router.route(word), Intent::Fallback, "word: {word}");
        }
    }
}
