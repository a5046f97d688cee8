//! BizAssist storage crate - SQLite-backed key-value persistence.
//!
//! Provides a WAL-mode SQLite database with migrations, a string-keyed
//! value store for JSON blobs and raw settings, and the append-only
//! analytics log.

pub mod analytics;
pub mod db;
pub mod kv;
pub mod migrations;

pub use analytics::AnalyticsLog;
pub use db::Database;
pub use kv::{keys, KvStore};
