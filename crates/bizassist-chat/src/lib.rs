//! Conversation engine for BizAssist.
//!
//! Turns a line of user text (or a clicked suggestion chip) into a bot
//! reaction: keyword-routed canned answers, six short multi-turn flows,
//! and optional AI delegation with rule-based fallback. The visible
//! transcript persists write-through so a restart resumes the
//! conversation.

pub mod engine;
pub mod error;
pub mod expectation;
pub mod flows;
pub mod router;
pub mod transcript;

pub use engine::ChatEngine;
pub use error::ChatError;
pub use expectation::ExpectationTracker;
pub use flows::{FlowOutcome, FlowResolver};
pub use router::IntentRouter;
pub use transcript::{MessageSink, NullSink, TranscriptStore};
