//! In-memory transcript mirrored write-through to the key-value store.
//!
//! The store is the sole writer of the display surface: every appended
//! message is forwarded to a [`MessageSink`]. Persistence rewrites the
//! full transcript on each append (O(n) per turn, acceptable for
//! human-paced conversations).

use tracing::debug;

use bizassist_core::types::Message;
use bizassist_storage::{keys, KvStore};

use crate::error::ChatError;

/// Display surface for rendered messages.
///
/// `push` receives every durable transcript entry in order. `transient`
/// receives display-only text (the AI "thinking" placeholder) that is
/// never part of the persisted transcript.
pub trait MessageSink: Send {
    fn push(&mut self, message: &Message);

    fn transient(&mut self, _text: &str) {}
}

/// Sink that renders nothing; useful for tests and headless runs.
#[derive(Debug, Default)]
pub struct NullSink;

impl MessageSink for NullSink {
    fn push(&mut self, _message: &Message) {}
}

/// Ordered log of conversation messages.
pub struct TranscriptStore {
    kv: KvStore,
    messages: Vec<Message>,
    sink: Box<dyn MessageSink>,
}

impl TranscriptStore {
    pub fn new(kv: KvStore, sink: Box<dyn MessageSink>) -> Self {
        Self {
            kv,
            messages: Vec::new(),
            sink,
        }
    }

    /// Append a message, render it, and persist the full transcript.
    pub fn append(&mut self, message: Message) -> Result<(), ChatError> {
        self.sink.push(&message);
        self.messages.push(message);
        self.persist()
    }

    /// All messages in conversation order.
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop every message and remove the persisted transcript key.
    pub fn clear(&mut self) -> Result<(), ChatError> {
        self.messages.clear();
        self.kv.remove(keys::CONVERSATION)?;
        Ok(())
    }

    /// Restore the transcript from storage, rendering each restored
    /// message. Returns false when storage held nothing (the caller
    /// should run the greeting flow instead).
    pub fn hydrate(&mut self) -> Result<bool, ChatError> {
        let restored: Vec<Message> = self.kv.get_json(keys::CONVERSATION, Vec::new())?;
        if restored.is_empty() {
            return Ok(false);
        }
        debug!("Restored {} transcript messages", restored.len());
        for message in &restored {
            self.sink.push(message);
        }
        self.messages = restored;
        // Re-persisting what was just read keeps the write-through
        // invariant and is byte-identical by construction.
        self.persist()?;
        Ok(true)
    }

    /// Render display-only text that is never persisted.
    pub fn show_transient(&mut self, text: &str) {
        self.sink.transient(text);
    }

    fn persist(&self) -> Result<(), ChatError> {
        self.kv.set_json(keys::CONVERSATION, &self.messages)?;
        Ok(())
    }
}

impl std::fmt::Debug for TranscriptStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranscriptStore")
            .field("messages", &self.messages.len())
            .finish()
    }
}
