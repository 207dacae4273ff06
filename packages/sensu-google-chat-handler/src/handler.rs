use google_chat_client::GoogleChatClient;

use crate::config::HandlerConfig;
use crate::error::{HandlerError, Result};
use crate::event::Event;
use crate::message::render_event;

/// Forwards Sensu events to Google Chat.
///
/// Holds no per-event state; one handler can serve concurrent invocations.
#[derive(Debug, Clone)]
pub struct Handler {
    client: GoogleChatClient,
}

impl Handler {
    pub fn new() -> google_chat_client::Result<Self> {
        Ok(Self::with_client(GoogleChatClient::new()?))
    }

    pub fn with_client(client: GoogleChatClient) -> Self {
        Self { client }
    }

    /// Validate `config`, render `event`, and post it once.
    pub async fn handle(&self, config: &HandlerConfig, event: &Event) -> Result<()> {
        config.validate()?;

        let message = render_event(event, &config.dashboard);
        tracing::debug!(text = %message.text, thread_key = %message.thread_key(), "Rendered message");

        let http_status = self
            .client
            .send(&config.webhook, &message)
            .await
            .map_err(|e| HandlerError::from_chat(event.check_name(), e))?;

        tracing::info!(
            entity = %event.resolved_entity(),
            check = %event.check_name(),
            check_status = %event.status(),
            http_status = http_status.as_u16(),
            "Message delivered to Google Chat"
        );
        Ok(())
    }
}

/// One-shot entry point: validate, build a client, deliver.
pub async fn handle_event(config: &HandlerConfig, event: &Event) -> Result<()> {
    // Checked here too so a bad config never builds a client.
    config.validate()?;

    let handler = Handler::new().map_err(|e| HandlerError::from_chat(event.check_name(), e))?;
    handler.handle(config, event).await
}
