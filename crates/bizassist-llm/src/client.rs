//! HTTP client for the chat-completions endpoint.
//!
//! Candidate models are tried in order: a transport error or non-2xx
//! status moves on to the next (cheaper) model, while a malformed
//! response body or missing choice content gives up immediately. No
//! failure ever propagates to the caller; the result is simply `None`.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use bizassist_core::config::LlmConfig;

/// Transcript role as seen by the completion endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRole {
    User,
    Assistant,
}

impl TurnRole {
    fn wire_name(self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::Assistant => "assistant",
        }
    }
}

/// One prior transcript turn forwarded as conversation context.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub text: String,
}

/// Seam between the conversation engine and the completion endpoint.
///
/// The engine checks the enabled/credential preconditions; an
/// implementation is only consulted once those hold.
#[async_trait]
pub trait CompletionDelegate: Send + Sync {
    /// Returns the completion text, or `None` on any failure.
    async fn complete(
        &self,
        api_key: &str,
        system_prompt: &str,
        history: &[ChatTurn],
        user_message: &str,
    ) -> Option<String>;
}

/// Delegate backed by an OpenAI-style chat-completions API.
#[derive(Debug, Clone)]
pub struct HttpCompletionClient {
    client: reqwest::Client,
    endpoint: String,
    models: Vec<String>,
    max_tokens: u32,
    temperature: f32,
}

impl HttpCompletionClient {
    /// Build a client from configuration. The candidate model list keeps
    /// its configured order; the first entry is the primary.
    pub fn new(config: &LlmConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_default();
        Self {
            client,
            endpoint: config.endpoint.clone(),
            models: config.models.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    async fn attempt(
        &self,
        api_key: &str,
        model: &str,
        messages: &[WireMessage],
    ) -> Result<String, AttemptError> {
        let body = CompletionRequest {
            model: model.to_string(),
            messages: messages.to_vec(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| AttemptError::Retryable(format!("transport: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AttemptError::Retryable(format!("status: {}", status)));
        }

        let parsed: CompletionResponse = response
            .json()
            .await
            .map_err(|e| AttemptError::Fatal(format!("malformed body: {}", e)))?;

        extract_text(parsed).ok_or_else(|| AttemptError::Fatal("no choice content".to_string()))
    }
}

#[async_trait]
impl CompletionDelegate for HttpCompletionClient {
    async fn complete(
        &self,
        api_key: &str,
        system_prompt: &str,
        history: &[ChatTurn],
        user_message: &str,
    ) -> Option<String> {
        let messages = build_wire_messages(system_prompt, history, user_message);

        for model in &self.models {
            debug!(model = %model, "Requesting completion");
            match self.attempt(api_key, model, &messages).await {
                Ok(text) => return Some(text),
                Err(AttemptError::Retryable(reason)) => {
                    warn!(model = %model, reason = %reason, "Completion attempt failed, trying next model");
                }
                Err(AttemptError::Fatal(reason)) => {
                    warn!(model = %model, reason = %reason, "Completion response unusable");
                    return None;
                }
            }
        }

        warn!("All candidate models exhausted");
        None
    }
}

enum AttemptError {
    /// Try the next candidate model.
    Retryable(String),
    /// Give up on this turn entirely.
    Fatal(String),
}

fn build_wire_messages(
    system_prompt: &str,
    history: &[ChatTurn],
    user_message: &str,
) -> Vec<WireMessage> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(WireMessage {
        role: "system".to_string(),
        content: system_prompt.to_string(),
    });
    for turn in history {
        messages.push(WireMessage {
            role: turn.role.wire_name().to_string(),
            content: turn.text.clone(),
        });
    }
    messages.push(WireMessage {
        role: "user".to_string(),
        content: user_message.to_string(),
    });
    messages
}

fn extract_text(response: CompletionResponse) -> Option<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

#[derive(Debug, Clone, Serialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<WireMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}
