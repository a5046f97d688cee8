//! Single-slot expectation tracker.
//!
//! Records that the next raw user input belongs to a specific multi-turn
//! flow instead of being routed as a fresh query. At most one expectation
//! is pending; setting another overwrites it (last-write-wins, no queue).
//! Deliberately in-memory only: a restart mid-flow drops the pending
//! prompt and the next input is treated as a fresh query.

use bizassist_core::types::Expectation;

#[derive(Debug, Default)]
pub struct ExpectationTracker {
    current: Option<Expectation>,
}

impl ExpectationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, kind: Expectation) {
        self.current = Some(kind);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<Expectation> {
        self.current
    }
}
