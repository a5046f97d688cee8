//! Append-only analytics log.
//!
//! Events are a pure side effect: recorded for future export, never read
//! back by any decision logic. A storage failure is logged and swallowed.

use chrono::Utc;
use tracing::warn;

use bizassist_core::types::AnalyticsEvent;

use crate::kv::{keys, KvStore};

/// Fire-and-forget event recorder backed by the kv store.
#[derive(Debug, Clone)]
pub struct AnalyticsLog {
    kv: KvStore,
}

impl AnalyticsLog {
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    /// Append one event to the persisted log.
    pub fn record(&self, event_name: &str) {
        let event = AnalyticsEvent {
            event_name: event_name.to_string(),
            timestamp_ms: Utc::now().timestamp_millis(),
        };
        if let Err(e) = self.append(event) {
            warn!("Failed to record analytics event {}: {}", event_name, e);
        }
    }

    fn append(&self, event: AnalyticsEvent) -> Result<(), bizassist_core::BizError> {
        let mut log: Vec<AnalyticsEvent> = self.kv.get_json(keys::ANALYTICS, Vec::new())?;
        log.push(event);
        self.kv.set_json(keys::ANALYTICS, &log)
    }

    /// Snapshot of all recorded events (used by tests and future export).
    pub fn all(&self) -> Result<Vec<AnalyticsEvent>, bizassist_core::BizError> {
        self.kv.get_json(keys::ANALYTICS, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use std::sync::Arc;

    fn log() -> AnalyticsLog {
        AnalyticsLog::new(KvStore::new(Arc::new(Database::in_memory().unwrap())))
    }

    #[test]
    fn test_record_appends() {
        let log = log();
        log.record("ticket_created");
        log.record("order_tracked");

        let events = log.all().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_name, "ticket_created");
        assert_eq!(events[1].event_name, "order_tracked");
    }

    #[test]
    fn test_record_preserves_prior_entries() {
        let log = log();
        for i in 0..5 {
            log.record(&format!("event_{}", i));
        }
        let events = log.all().unwrap();
        assert_eq!(events.len(), 5);
        assert_eq!(events[0].event_name, "event_0");
        assert_eq!(events[4].event_name, "event_4");
    }

    #[test]
    fn test_timestamps_are_millis() {
        let log = log();
        log.record("probe");
        let events = log.all().unwrap();
        let now = Utc::now().timestamp_millis();
        assert!((now - events[0].timestamp_ms).abs() < 5_000);
    }

    #[test]
    fn test_empty_log_reads_empty() {
        let log = log();
        assert!(log.all().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_log_restarts_from_fallback() {
        let db = Arc::new(Database::in_memory().unwrap());
        let kv = KvStore::new(db);
        kv.set_raw(keys::ANALYTICS, "not json").unwrap();

        let log = AnalyticsLog::new(kv);
        log.record("after_corruption");
        let events = log.all().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_name, "after_corruption");
    }
}
