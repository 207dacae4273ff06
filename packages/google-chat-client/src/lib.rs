//! Pure Google Chat incoming-webhook client.
//!
//! Posts plain-text messages into a Chat space, grouped by thread key.
//! One attempt per message, bounded by a fixed timeout; no retries.
//!
//! # Example
//!
//! ```rust,ignore
//! use google_chat_client::{GoogleChatClient, ThreadMessage};
//!
//! let client = GoogleChatClient::new()?;
//! let message = ThreadMessage::new("*`ALERT   `* disk full", "db-01");
//!
//! client.send(&webhook_url, &message).await?;
//! ```

pub mod error;
pub mod types;

pub use error::{ChatError, Result};
pub use types::{Thread, ThreadMessage};

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

/// Upper bound on a single delivery, connect through response headers.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Google Chat webhook client.
///
/// Cloning is cheap and clones share one connection pool.
#[derive(Debug, Clone)]
pub struct GoogleChatClient {
    client: reqwest::Client,
}

impl GoogleChatClient {
    /// Build a client with the default 10 second timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ChatError::Client)?;
        Ok(Self { client })
    }

    /// Post `message` to `webhook`.
    ///
    /// Any status below 400 counts as delivered and is returned. The response
    /// body is never read.
    pub async fn send(&self, webhook: &str, message: &ThreadMessage) -> Result<StatusCode> {
        let body = serde_json::to_vec(message)?;

        let resp = self
            .client
            .post(webhook)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            // The webhook URL carries its credential; keep it out of the error.
            .map_err(|e| ChatError::Network(e.without_url()))?;

        let status = resp.status();
        if status.as_u16() >= 400 {
            tracing::warn!(
                status = status.as_u16(),
                thread_key = %message.thread_key(),
                "Google Chat rejected message"
            );
            return Err(ChatError::Status(status.as_u16()));
        }

        tracing::debug!(
            status = status.as_u16(),
            thread_key = %message.thread_key(),
            "Google Chat accepted message"
        );
        Ok(status)
    }
}
