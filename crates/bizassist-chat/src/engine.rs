//! Conversation engine: one turn in, one reaction out.
//!
//! Dispatch order for a submitted line: pending expectation first, then
//! the AI delegate (when enabled and keyed), then the keyword router
//! with its two-tier fallback. The user's message is always appended to
//! the transcript before any bot reaction.

use std::sync::Arc;

use tracing::{debug, info};

use bizassist_core::catalog;
use bizassist_core::types::{
    Expectation, Intent, Language, Message, Profile, Role, SessionSettings, Suggestion,
};
use bizassist_llm::client::{ChatTurn, CompletionDelegate, TurnRole};
use bizassist_llm::prompt::build_system_prompt;
use bizassist_storage::{keys, AnalyticsLog, KvStore};

use crate::error::ChatError;
use crate::expectation::ExpectationTracker;
use crate::flows::FlowResolver;
use crate::router::IntentRouter;
use crate::transcript::{MessageSink, TranscriptStore};

pub struct ChatEngine {
    transcript: TranscriptStore,
    expectation: ExpectationTracker,
    router: IntentRouter,
    flows: FlowResolver,
    analytics: AnalyticsLog,
    kv: KvStore,
    settings: SessionSettings,
    delegate: Option<Arc<dyn CompletionDelegate>>,
    ai_context_turns: usize,
    // Bumped on every submit and on clear; an in-flight AI response is
    // discarded when its generation no longer matches.
    generation: u64,
}

impl ChatEngine {
    pub fn new(
        kv: KvStore,
        sink: Box<dyn MessageSink>,
        delegate: Option<Arc<dyn CompletionDelegate>>,
        ai_context_turns: usize,
    ) -> Result<Self, ChatError> {
        let settings = load_settings(&kv)?;
        Ok(Self {
            transcript: TranscriptStore::new(kv.clone(), sink),
            expectation: ExpectationTracker::new(),
            router: IntentRouter::new(),
            flows: FlowResolver::new(),
            analytics: AnalyticsLog::new(kv.clone()),
            kv,
            settings,
            delegate,
            ai_context_turns,
            generation: 0,
        })
    }

    /// Resume the persisted conversation, or seed a fresh greeting.
    /// Either way, a returning visitor with a saved profile gets a
    /// personalized welcome-back line.
    pub fn start(&mut self) -> Result<(), ChatError> {
        if !self.transcript.hydrate()? {
            self.greet()?;
        }
        self.personalize()?;
        Ok(())
    }

    /// Handle one line of user input.
    pub async fn submit(&mut self, raw: &str) -> Result<(), ChatError> {
        let text = raw.trim();
        if text.is_empty() {
            return Ok(());
        }
        self.generation += 1;
        self.transcript.append(Message::user(text))?;

        if let Some(kind) = self.expectation.current() {
            self.expectation.clear();
            return self.resolve_flow(kind, text);
        }

        if self.settings.ai_ready() {
            if let Some(delegate) = self.delegate.clone() {
                match self.delegate_turn(delegate, text).await? {
                    DelegateResult::Answered | DelegateResult::Superseded => return Ok(()),
                    DelegateResult::Unavailable => {}
                }
            }
        }

        let intent = self.router.route(text);
        if intent == Intent::Fallback {
            return self.fallback_reply(text);
        }
        self.dispatch(intent)
    }

    /// React to a clicked suggestion chip.
    pub fn trigger(&mut self, intent: Intent) -> Result<(), ChatError> {
        self.dispatch(intent)
    }

    /// Wipe the transcript and reseed the greeting. Session settings and
    /// the stored profile survive; any in-flight AI response is dropped.
    pub fn clear(&mut self) -> Result<(), ChatError> {
        self.generation += 1;
        self.transcript.clear()?;
        self.greet()?;
        self.personalize()?;
        Ok(())
    }

    /// Store the API key. An empty submission keeps AI assist disabled.
    pub fn set_api_key(&mut self, raw: &str) -> Result<bool, ChatError> {
        let key = raw.trim();
        let strings = catalog::table(self.settings.language);
        if key.is_empty() {
            self.settings.ai_enabled = false;
            self.kv.set_raw(keys::AI_ENABLED, "false")?;
            self.transcript.append(Message::bot(strings.ai_key_missing))?;
            return Ok(false);
        }
        self.settings.api_key = key.to_string();
        self.kv.set_raw(keys::API_KEY, key)?;
        self.transcript.append(Message::bot(strings.ai_key_saved))?;
        Ok(true)
    }

    /// Flip AI assist on or off. Enabling without a stored key prompts
    /// for one. Returns the new state.
    pub fn toggle_ai(&mut self) -> Result<bool, ChatError> {
        self.settings.ai_enabled = !self.settings.ai_enabled;
        self.kv.set_raw(
            keys::AI_ENABLED,
            if self.settings.ai_enabled { "true" } else { "false" },
        )?;
        let strings = catalog::table(self.settings.language);
        if self.settings.ai_enabled {
            info!("AI assist enabled");
            self.transcript.append(Message::bot(strings.ai_enabled_notice))?;
            if self.settings.api_key.trim().is_empty() {
                self.transcript.append(Message::bot(strings.ai_key_prompt))?;
            }
        } else {
            info!("AI assist disabled");
            self.transcript.append(Message::bot(strings.ai_disabled_notice))?;
        }
        Ok(self.settings.ai_enabled)
    }

    pub fn switch_language(&mut self, lang: Language) -> Result<(), ChatError> {
        self.settings.language = lang;
        self.kv.set_raw(keys::LANGUAGE, lang.tag())?;
        let strings = catalog::table(lang);
        self.transcript
            .append(Message::bot(strings.lang_switched(lang)))?;
        Ok(())
    }

    pub fn messages(&self) -> &[Message] {
        self.transcript.all()
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn pending(&self) -> Option<Expectation> {
        self.expectation.current()
    }

    pub fn analytics(&self) -> &AnalyticsLog {
        &self.analytics
    }

    fn greet(&mut self) -> Result<(), ChatError> {
        let strings = catalog::table(self.settings.language);
        self.transcript
            .append(Message::bot(format!("{} {}", strings.welcome, strings.intro)))?;
        let chips = vec![
            Suggestion {
                label: strings.label_browse.to_string(),
                intent: Intent::Browse,
            },
            Suggestion {
                label: strings.label_track.to_string(),
                intent: Intent::Track,
            },
            Suggestion {
                label: strings.label_agent.to_string(),
                intent: Intent::Agent,
            },
        ];
        self.transcript
            .append(Message::bot_with_suggestions(strings.options_intro, chips))?;
        Ok(())
    }

    fn personalize(&mut self) -> Result<(), ChatError> {
        let profile: Option<Profile> = self.kv.get_json(keys::PROFILE, None)?;
        if let Some(profile) = profile {
            if !profile.name.trim().is_empty() {
                let strings = catalog::table(self.settings.language);
                self.transcript
                    .append(Message::bot(strings.personalize(&profile.name)))?;
            }
        }
        Ok(())
    }

    fn resolve_flow(&mut self, kind: Expectation, input: &str) -> Result<(), ChatError> {
        let outcome = self.flows.resolve(kind, input, self.settings.language);
        if let Some(profile) = &outcome.profile {
            self.kv.set_json(keys::PROFILE, profile)?;
        }
        self.analytics.record(outcome.event);
        self.transcript.append(Message::bot(outcome.reply))?;
        Ok(())
    }

    async fn delegate_turn(
        &mut self,
        delegate: Arc<dyn CompletionDelegate>,
        text: &str,
    ) -> Result<DelegateResult, ChatError> {
        let snapshot = self.generation;
        let strings = catalog::table(self.settings.language);
        self.transcript.show_transient(strings.thinking);

        let system_prompt = build_system_prompt(self.settings.language);
        let history = self.recent_history();
        let answer = delegate
            .complete(&self.settings.api_key, &system_prompt, &history, text)
            .await;

        if self.generation != snapshot {
            debug!("Discarding AI response from a superseded turn");
            return Ok(DelegateResult::Superseded);
        }
        match answer {
            Some(reply) => {
                self.transcript.append(Message::bot(reply))?;
                self.analytics.record("ai_answered");
                Ok(DelegateResult::Answered)
            }
            None => {
                let strings = catalog::table(self.settings.language);
                self.transcript.append(Message::bot(strings.ai_failed))?;
                self.analytics.record("ai_failed");
                Ok(DelegateResult::Unavailable)
            }
        }
    }

    /// The last few transcript turns as delegate context, excluding the
    /// just-appended user message (it travels separately).
    fn recent_history(&self) -> Vec<ChatTurn> {
        let all = self.transcript.all();
        let prior = &all[..all.len().saturating_sub(1)];
        let start = prior.len().saturating_sub(self.ai_context_turns);
        prior[start..]
            .iter()
            .map(|message| ChatTurn {
                role: match message.role {
                    Role::User => TurnRole::User,
                    Role::Bot => TurnRole::Assistant,
                },
                text: message.content.as_plain_text(),
            })
            .collect()
    }

    fn fallback_reply(&mut self, text: &str) -> Result<(), ChatError> {
        let strings = catalog::table(self.settings.language);
        let reply = if self.router.is_business_query(text) {
            strings.fallback_business
        } else {
            strings.fallback_generic
        };
        self.transcript.append(Message::bot(reply))?;
        Ok(())
    }

    fn dispatch(&mut self, intent: Intent) -> Result<(), ChatError> {
        let strings = catalog::table(self.settings.language);
        let compare_chip = || {
            vec![Suggestion {
                label: strings.label_compare.to_string(),
                intent: Intent::Compare,
            }]
        };
        match intent {
            Intent::Hours => self.transcript.append(Message::bot(strings.hours)),
            Intent::Location => self.transcript.append(Message::bot(strings.location)),
            Intent::Contact => self.transcript.append(Message::bot(strings.contact)),
            Intent::Pricing => self
                .transcript
                .append(Message::bot_with_suggestions(strings.pricing, compare_chip())),
            Intent::Compare => self.transcript.append(Message::bot(strings.compare_plans)),
            Intent::Returns => self.transcript.append(Message::bot(strings.returns)),
            Intent::Payments => self.transcript.append(Message::bot(strings.payments)),
            Intent::Browse => self
                .transcript
                .append(Message::bot_cards(strings.browse_cards(), compare_chip())),
            Intent::Ticket => self.prompt_flow(strings.ticket_prompt, Expectation::TicketDetails),
            Intent::Track => self.prompt_flow(strings.track_prompt, Expectation::OrderId),
            Intent::Assist => self.prompt_flow(strings.assist_prompt, Expectation::AssistDetails),
            Intent::Lead => self.prompt_flow(strings.lead_prompt, Expectation::LeadDetails),
            Intent::Qualify => self.prompt_flow(strings.qualify_prompt, Expectation::Budget),
            Intent::Schedule => self.prompt_flow(strings.schedule_prompt, Expectation::Slot),
            Intent::Agent => {
                self.analytics.record("agent_requested");
                self.transcript.append(Message::bot(strings.agent_reply))
            }
            Intent::LangEn => self.switch_language(Language::En),
            Intent::LangEs => self.switch_language(Language::Es),
            Intent::ToggleAi => self.toggle_ai().map(|_| ()),
            Intent::SetApiKey => self.transcript.append(Message::bot(strings.ai_key_prompt)),
            Intent::Marketing => self.transcript.append(Message::bot(strings.marketing_advice)),
            Intent::Finance => self.transcript.append(Message::bot(strings.finance_advice)),
            Intent::Hr => self.transcript.append(Message::bot(strings.hr_advice)),
            Intent::Startup => self.transcript.append(Message::bot(strings.startup_advice)),
            Intent::Fallback => self.transcript.append(Message::bot(strings.fallback_generic)),
            Intent::Unknown => self.transcript.append(Message::bot(strings.not_sure)),
        }
    }

    fn prompt_flow(&mut self, prompt: &str, kind: Expectation) -> Result<(), ChatError> {
        self.transcript.append(Message::bot(prompt))?;
        self.expectation.set(kind);
        Ok(())
    }
}

enum DelegateResult {
    /// The delegate answered; the turn is done.
    Answered,
    /// The delegate failed; fall back to the rule path.
    Unavailable,
    /// A clear superseded this turn while the request was in flight.
    Superseded,
}

fn load_settings(kv: &KvStore) -> Result<SessionSettings, ChatError> {
    let language = kv
        .get_raw(keys::LANGUAGE)?
        .map(|tag| Language::from_tag(&tag))
        .unwrap_or_default();
    let ai_enabled = kv
        .get_raw(keys::AI_ENABLED)?
        .map(|v| v == "true")
        .unwrap_or(false);
    let api_key = kv.get_raw(keys::API_KEY)?.unwrap_or_default();
    Ok(SessionSettings {
        language,
        ai_enabled,
        api_key,
    })
}
