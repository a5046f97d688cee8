//! Error types for the conversation engine.

use bizassist_core::error::BizError;

/// Errors from the chat engine.
///
/// Deliberately narrow: AI failures and unparseable flow input are not
/// errors at all (they resolve to fallback replies), so only persistence
/// can actually fail a turn.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<BizError> for ChatError {
    fn from(err: BizError) -> Self {
        ChatError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ChatError::Storage("disk full".to_string());
        assert_eq!(err.to_string(), "storage error: disk full");
    }

    #[test]
    fn test_from_biz_error() {
        let err: ChatError = BizError::Storage("locked".to_string()).into();
        assert!(err.to_string().contains("locked"));
    }
}
