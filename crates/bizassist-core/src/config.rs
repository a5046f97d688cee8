use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{BizError, Result};

/// Top-level configuration for the BizAssist application.
///
/// Loaded from `~/.bizassist/config.toml` by default. Each section covers
/// one concern; unknown or missing sections fall back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BizConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub llm: LlmConfig,
}

impl BizConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: BizConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| BizError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Data directory for the SQLite store.
    pub data_dir: String,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: "~/.bizassist/data".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Conversation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Default catalog language tag when none is persisted: "en" or "es".
    pub default_language: String,
    /// How many recent transcript turns accompany an AI request.
    pub ai_context_turns: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            ai_context_turns: 10,
        }
    }
}

/// Completion endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Chat-completions endpoint URL.
    pub endpoint: String,
    /// Candidate models tried in order; the first is the primary, the rest
    /// are cheaper fallbacks used only after a failed attempt.
    pub models: Vec<String>,
    /// Token cap per completion.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            models: vec!["gpt-4o".to_string(), "gpt-4o-mini".to_string()],
            max_tokens: 256,
            temperature: 0.7,
            request_timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BizConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.chat.default_language, "en");
        assert_eq!(config.chat.ai_context_turns, 10);
        assert_eq!(config.llm.models.len(), 2);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = BizConfig::load_or_default(Path::new("/nonexistent/config.toml"));
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = BizConfig::default();
        config.chat.default_language = "es".to_string();
        config.llm.models = vec!["test-model".to_string()];
        config.save(&path).unwrap();

        let loaded = BizConfig::load(&path).unwrap();
        assert_eq!(loaded.chat.default_language, "es");
        assert_eq!(loaded.llm.models, vec!["test-model".to_string()]);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: BizConfig = toml::from_str(
            r#"
            [chat]
            ai_context_turns = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.chat.ai_context_turns, 4);
        assert_eq!(config.chat.default_language, "en");
        assert_eq!(config.llm.max_tokens, 256);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = BizConfig::load(Path::new("/dev/null"));
        // /dev/null parses as empty TOML, which is a valid (default) config.
        assert!(err.is_ok());
        let parsed: std::result::Result<BizConfig, _> = toml::from_str("not = [valid");
        assert!(parsed.is_err());
    }
}
