//! BizAssist core crate - shared types, localized catalog, config, errors.

pub mod catalog;
pub mod config;
pub mod error;
pub mod types;

pub use catalog::{table, StringTable};
pub use config::BizConfig;
pub use error::{BizError, Result};
pub use types::*;
