use google_chat_client::ChatError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HandlerError>;

/// A required configuration value is missing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("--webhook or GOOGLE_CHAT_WEBHOOK environment variable is required")]
    MissingWebhook,

    #[error("--dashboard or SENSU_DASHBOARD environment variable is required")]
    MissingDashboard,
}

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to encode message for check {check}")]
    Encoding {
        check: String,
        #[source]
        source: ChatError,
    },

    #[error("failed to deliver message for check {check}")]
    Delivery {
        check: String,
        #[source]
        source: ChatError,
    },
}

/// Coarse classification of a [`HandlerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Encoding,
    Delivery,
}

impl HandlerError {
    /// Wrap a client error, separating encode failures from delivery failures.
    pub(crate) fn from_chat(check: &str, source: ChatError) -> Self {
        let check = check.to_string();
        if source.is_encode() {
            HandlerError::Encoding { check, source }
        } else {
            HandlerError::Delivery { check, source }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            HandlerError::Config(_) => ErrorKind::Configuration,
            HandlerError::Encoding { .. } => ErrorKind::Encoding,
            HandlerError::Delivery { .. } => ErrorKind::Delivery,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_failures_are_delivery_errors() {
        let err = HandlerError::from_chat("check-http", ChatError::Status(500));
        assert_eq!(err.kind(), ErrorKind::Delivery);
        assert_eq!(err.to_string(), "failed to deliver message for check check-http");

        let chain = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(
            chain,
            "failed to deliver message for check check-http: \
             error sending message to Google Chat, got status 500"
        );
    }

    #[test]
    fn encode_failures_are_encoding_errors() {
        let source = serde_json::from_str::<u8>("{").unwrap_err();
        let err = HandlerError::from_chat("disk", ChatError::Encode(source));
        assert_eq!(err.kind(), ErrorKind::Encoding);
    }

    #[test]
    fn config_errors_are_transparent() {
        let err = HandlerError::from(ConfigError::MissingDashboard);
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(
            err.to_string(),
            "--dashboard or SENSU_DASHBOARD environment variable is required"
        );
    }
}
