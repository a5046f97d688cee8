//! AI delegation for BizAssist.
//!
//! Best-effort bridge to a chat-completions HTTP endpoint. The delegate
//! never errors toward the conversation engine: every failure collapses
//! to `None` and the engine falls back to rule-based routing.

pub mod client;
pub mod prompt;

pub use client::{ChatTurn, CompletionDelegate, HttpCompletionClient, TurnRole};
pub use prompt::build_system_prompt;
