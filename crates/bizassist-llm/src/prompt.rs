//! System prompt assembly.
//!
//! Embeds the localized business facts (hours, location, contact) and the
//! assistant persona so the remote model answers in character and in the
//! visitor's language.

use bizassist_core::catalog;
use bizassist_core::types::Language;

/// Build the system prompt for a completion request.
pub fn build_system_prompt(lang: Language) -> String {
    let s = catalog::table(lang);
    let language_name = match lang {
        Language::En => "English",
        Language::Es => "Spanish",
    };
    format!(
        "You are {bot}, a friendly and concise business-support assistant. \
         Answer in {language_name}, in at most three sentences. \
         Business facts you may cite: {hours} {location} {contact} \
         If a question needs order tracking, support tickets, or demo booking, \
         point the visitor at those options instead of inventing details.",
        bot = s.bot,
        language_name = language_name,
        hours = s.hours,
        location = s.location,
        contact = s.contact,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_business_facts() {
        let prompt = build_system_prompt(Language::En);
        assert!(prompt.contains("Monday through Friday"));
        assert!(prompt.contains("123 Business Ave"));
        assert!(prompt.contains("support@example.com"));
    }

    #[test]
    fn test_prompt_names_persona() {
        let prompt = build_system_prompt(Language::En);
        assert!(prompt.contains("BizAssist"));
    }

    #[test]
    fn test_prompt_localized_facts() {
        let prompt = build_system_prompt(Language::Es);
        assert!(prompt.contains("lunes a viernes"));
        assert!(prompt.contains("Answer in Spanish"));
    }
}
