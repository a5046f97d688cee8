//! Multi-turn flow resolvers.
//!
//! Each resolver consumes the raw input captured under a pending
//! expectation and produces the bot reply plus side effects (profile
//! capture, analytics event name). Resolution never fails: unparseable
//! input degrades to a documented default.

use std::sync::LazyLock;

use chrono::{Duration, Local};
use rand::Rng;
use regex::Regex;

use bizassist_core::catalog;
use bizassist_core::types::{Expectation, Language, Profile};

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)name\s*[:\-]?\s*([\w\s]+)").unwrap()
});
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([\w.+-]+@[\w-]+\.[\w.-]+)").unwrap()
});
static TWO_PM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)2\s*pm").unwrap());
static FOUR_PM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)4\s*pm").unwrap());

/// Result of resolving one pending flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowOutcome {
    /// Bot reply text, already localized.
    pub reply: String,
    /// Profile to persist, when the flow captured one.
    pub profile: Option<Profile>,
    /// Analytics event recorded for this resolution.
    pub event: &'static str,
}

#[derive(Debug, Default)]
pub struct FlowResolver;

impl FlowResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, kind: Expectation, input: &str, lang: Language) -> FlowOutcome {
        let strings = catalog::table(lang);
        match kind {
            Expectation::TicketDetails => FlowOutcome {
                reply: strings.ticket_created(&new_ticket_id()),
                profile: None,
                event: "ticket_created",
            },
            Expectation::OrderId => FlowOutcome {
                reply: strings.track_result(&normalize_order_id(input), &delivery_eta()),
                profile: None,
                event: "order_tracked",
            },
            Expectation::AssistDetails => FlowOutcome {
                reply: strings.assist_tip.to_string(),
                profile: None,
                event: "assist_provided",
            },
            Expectation::LeadDetails => {
                let profile = extract_profile(input);
                FlowOutcome {
                    reply: strings.thanks_lead(&profile.name),
                    profile: Some(profile),
                    event: "lead_captured",
                }
            }
            Expectation::Budget => FlowOutcome {
                reply: strings.budget_reco.to_string(),
                profile: None,
                event: "lead_qualified",
            },
            Expectation::Slot => FlowOutcome {
                reply: strings.scheduled(pick_slot(input)),
                profile: None,
                event: "demo_scheduled",
            },
        }
    }
}

/// Fresh ticket id: `TKT_` + 6 random base36 chars + `_` + the last 4
/// base36 digits of the current epoch millis.
fn new_ticket_id() -> String {
    let mut rng = rand::thread_rng();
    let rand_part: String = (0..6).map(|_| base36_digit(rng.gen_range(0..36))).collect();
    let millis = Local::now().timestamp_millis().unsigned_abs();
    let time36 = to_base36(millis);
    let tail_start = time36.len().saturating_sub(4);
    format!("TKT_{}_{}", rand_part, &time36[tail_start..])
}

fn base36_digit(value: u64) -> char {
    char::from_digit(value as u32, 36).unwrap_or('0')
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(base36_digit(value % 36));
        value /= 36;
    }
    digits.iter().rev().collect()
}

/// Canonicalize a raw order id: uppercase, keep only `[A-Z0-9_-]`,
/// cap at 18 chars, and substitute `ORDER` when nothing survives.
fn normalize_order_id(input: &str) -> String {
    let cleaned: String = input
        .trim()
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || *c == '_' || *c == '-')
        .take(18)
        .collect();
    if cleaned.is_empty() {
        "ORDER".to_string()
    } else {
        cleaned
    }
}

/// Fixed three-day delivery window, formatted like `Tue Sep 02 2026`.
fn delivery_eta() -> String {
    (Local::now() + Duration::days(3)).format("%a %b %d %Y").to_string()
}

/// Pull a name and email out of free-form lead text.
///
/// Name: a labeled `name: ...` capture, else the first whitespace/comma
/// token, else `Friend`. Email: first address-shaped token, else a
/// placeholder.
fn extract_profile(input: &str) -> Profile {
    let email = EMAIL_RE
        .captures(input)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "unknown@example.com".to_string());

    // The labeled capture is greedy over [\w\s]+ so it stops at the
    // email's @ or any punctuation.
    let name = NAME_RE
        .captures(input)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|n| !n.is_empty())
        .or_else(|| {
            input
                .split(|c: char| c.is_whitespace() || c == ',')
                .find(|t| !t.is_empty())
                .map(|t| t.to_string())
        })
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "Friend".to_string());

    Profile { name, email }
}

/// Map free-form scheduling text onto one of the two offered slots.
/// Anything that names neither slot books the earlier one.
fn pick_slot(input: &str) -> &'static str {
    if TWO_PM_RE.is_match(input) {
        "2 PM"
    } else if FOUR_PM_RE.is_match(input) {
        "4 PM"
    } else {
        "2 PM"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_id_shape() {
        let id = new_ticket_id();
        let parts: Vec<&str> = id.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "TKT");
        assert_eq!(parts[1].len(), 6);
        assert!(parts[1].chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert_eq!(parts[2].len(), 4);
    }

    #[test]
    fn test_ticket_ids_differ() {
        assert_ne!(new_ticket_id(), new_ticket_id());
    }

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(36 * 36 + 1), "101");
    }

    #[test]
    fn test_normalize_order_id_strips_and_uppercases() {
        assert_eq!(normalize_order_id("order #A1b2-c3!!"), "ORDERA1B2-C3");
    }

    #[test]
    fn test_normalize_order_id_truncates_to_18() {
        let long = "a".repeat(40);
        assert_eq!(normalize_order_id(&long).len(), 18);
    }

    #[test]
    fn test_normalize_order_id_keeps_underscore_and_dash() {
        assert_eq!(normalize_order_id("ab_cd-ef"), "AB_CD-EF");
    }

    #[test]
    fn test_normalize_order_id_empty_falls_back() {
        assert_eq!(normalize_order_id("   "), "ORDER");
        assert_eq!(normalize_order_id("!!!"), "ORDER");
    }

    #[test]
    fn test_delivery_eta_format() {
        let eta = delivery_eta();
        // e.g. "Tue Sep 02 2026": four space-separated fields.
        assert_eq!(eta.split(' ').count(), 4);
        let expected = (Local::now() + Duration::days(3)).format("%a %b %d %Y").to_string();
        assert_eq!(eta, expected);
    }

    #[test]
    fn test_extract_profile_labeled_name_and_email() {
        let p = extract_profile("name: Ada Lovelace, ada@example.com");
        assert_eq!(p.name, "Ada Lovelace");
        assert_eq!(p.email, "ada@example.com");
    }

    #[test]
    fn test_extract_profile_first_token_when_unlabeled() {
        let p = extract_profile("Grace, grace@navy.mil");
        assert_eq!(p.name, "Grace");
        assert_eq!(p.email, "grace@navy.mil");
    }

    #[test]
    fn test_extract_profile_defaults() {
        let p = extract_profile("");
        assert_eq!(p.name, "Friend");
        assert_eq!(p.email, "unknown@example.com");
    }

    #[test]
    fn test_extract_profile_email_only() {
        let p = extract_profile("reach me at bob@corp.io");
        assert_eq!(p.email, "bob@corp.io");
        assert_eq!(p.name, "reach");
    }

    #[test]
    fn test_pick_slot() {
        assert_eq!(pick_slot("2pm works"), "2 PM");
        assert_eq!(pick_slot("works for me, 4pm please"), "4 PM");
        assert_eq!(pick_slot("4 PM"), "4 PM");
        assert_eq!(pick_slot("anytime"), "2 PM");
    }

    #[test]
    fn test_resolve_ticket_details() {
        let out = FlowResolver::new().resolve(Expectation::TicketDetails, "app crashes", Language::En);
        assert!(out.reply.starts_with("Ticket created: TKT_"));
        assert!(out.profile.is_none());
        assert_eq!(out.event, "ticket_created");
    }

    #[test]
    fn test_resolve_order_id() {
        let out = FlowResolver::new().resolve(Expectation::OrderId, "ab-123", Language::En);
        assert!(out.reply.contains("Order AB-123 is in transit"));
        assert_eq!(out.event, "order_tracked");
    }

    #[test]
    fn test_resolve_lead_details_captures_profile() {
        let out = FlowResolver::new().resolve(
            Expectation::LeadDetails,
            "name: Ada ada@example.com",
            Language::En,
        );
        let profile = out.profile.unwrap();
        assert_eq!(profile.email, "ada@example.com");
        assert!(out.reply.contains(&profile.name));
        assert_eq!(out.event, "lead_captured");
    }

    #[test]
    fn test_resolve_budget_ignores_input_text() {
        let resolver = FlowResolver::new();
        let a = resolver.resolve(Expectation::Budget, "<$100", Language::En);
        let b = resolver.resolve(Expectation::Budget, "over $10k", Language::En);
        assert_eq!(a.reply, b.reply);
        assert_eq!(a.event, "lead_qualified");
    }

    #[test]
    fn test_resolve_slot_localized() {
        let out = FlowResolver::new().resolve(Expectation::Slot, "4 pm", Language::Es);
        assert_eq!(out.reply, "Demo reservada a las 4 PM. Recibirás un recordatorio.");
        assert_eq!(out.event, "demo_scheduled");
    }

    #[test]
    fn test_resolve_assist_details() {
        let out = FlowResolver::new().resolve(Expectation::AssistDetails, "printer on fire", Language::En);
        assert!(out.reply.contains("restart the app"));
        assert_eq!(out.event, "assist_provided");
    }
}
