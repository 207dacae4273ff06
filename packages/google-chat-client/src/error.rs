//! Error types for the Google Chat client.

use thiserror::Error;

/// Result type for Google Chat client operations.
pub type Result<T> = std::result::Result<T, ChatError>;

/// Google Chat client errors.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The message could not be serialized to JSON
    #[error("failed to marshal JSON")]
    Encode(#[from] serde_json::Error),

    /// Transport failure (connection refused, timeout, DNS)
    #[error("failed to send message to Google Chat")]
    Network(#[source] reqwest::Error),

    /// The webhook answered with a status code of 400 or above
    #[error("error sending message to Google Chat, got status {0}")]
    Status(u16),
}

impl ChatError {
    /// JSON encoding failure.
    pub fn is_encode(&self) -> bool {
        matches!(self, ChatError::Encode(_))
    }

    /// Status code returned by the webhook, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ChatError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_includes_code() {
        let err = ChatError::Status(503);
        assert_eq!(err.status(), Some(503));
        assert!(err.to_string().contains("503"));
        assert!(!err.is_encode());
    }

    #[test]
    fn encode_error_converts_from_serde() {
        let serde_err = serde_json::from_str::<u8>("not json").unwrap_err();
        let err: ChatError = serde_err.into();
        assert!(err.is_encode());
        assert_eq!(err.to_string(), "failed to marshal JSON");
        assert!(std::error::Error::source(&err).is_some());
    }
}
