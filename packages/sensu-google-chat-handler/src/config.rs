use crate::error::ConfigError;
use crate::event::Event;

/// Annotation prefix for per-entity and per-check overrides.
pub const KEYSPACE: &str = "sensu.io/plugins/google-chat/config";

pub const WEBHOOK_ENV: &str = "GOOGLE_CHAT_WEBHOOK";
pub const DASHBOARD_ENV: &str = "SENSU_DASHBOARD";

/// Handler configuration, passed by value into each invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandlerConfig {
    /// Incoming-webhook URL of the Chat space. Carries its own credential.
    pub webhook: String,
    /// Sensu dashboard base URL used to build event links.
    pub dashboard: String,
}

impl HandlerConfig {
    pub fn new(webhook: impl Into<String>, dashboard: impl Into<String>) -> Self {
        Self {
            webhook: webhook.into(),
            dashboard: dashboard.into(),
        }
    }

    /// Both URLs must be non-empty. Webhook is checked first.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.webhook.is_empty() {
            return Err(ConfigError::MissingWebhook);
        }
        if self.dashboard.is_empty() {
            return Err(ConfigError::MissingDashboard);
        }
        Ok(())
    }

    /// Apply `{KEYSPACE}/webhook` and `{KEYSPACE}/dashboard` annotations.
    ///
    /// Check annotations take precedence over entity annotations.
    pub fn with_annotations(&self, event: &Event) -> Self {
        let mut config = self.clone();
        if let Some(webhook) = event.annotation(&annotation_key("webhook")) {
            tracing::debug!("webhook overridden by annotation");
            config.webhook = webhook.to_string();
        }
        if let Some(dashboard) = event.annotation(&annotation_key("dashboard")) {
            tracing::debug!(dashboard, "dashboard overridden by annotation");
            config.dashboard = dashboard.to_string();
        }
        config
    }
}

fn annotation_key(path: &str) -> String {
    format!("{}/{}", KEYSPACE, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_config() {
        let config = HandlerConfig::new(
            "https://chat.googleapis.com/webhook",
            "https://sensu.example.com",
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_webhook() {
        let err = HandlerConfig::new("", "https://x").validate().unwrap_err();
        assert_eq!(err, ConfigError::MissingWebhook);
        assert!(err.to_string().contains("webhook"));
    }

    #[test]
    fn missing_dashboard() {
        let err = HandlerConfig::new("https://x", "").validate().unwrap_err();
        assert_eq!(err, ConfigError::MissingDashboard);
        assert!(err.to_string().contains("dashboard"));
    }

    #[test]
    fn both_missing_reports_webhook() {
        let err = HandlerConfig::default().validate().unwrap_err();
        assert_eq!(err, ConfigError::MissingWebhook);
    }

    #[test]
    fn annotations_override_flags() {
        let mut event = Event::new("default", "e", "", "c", 0);
        event.entity.metadata.annotations.insert(
            "sensu.io/plugins/google-chat/config/dashboard".into(),
            "https://entity.example.com".into(),
        );
        event.check.metadata.annotations.insert(
            "sensu.io/plugins/google-chat/config/webhook".into(),
            "https://chat.example.com/check".into(),
        );

        let base = HandlerConfig::new("https://flag", "https://flag-dashboard");
        let config = base.with_annotations(&event);

        assert_eq!(config.webhook, "https://chat.example.com/check");
        assert_eq!(config.dashboard, "https://entity.example.com");
        assert_eq!(base.webhook, "https://flag");
    }

    #[test]
    fn empty_annotation_still_fails_validation() {
        let mut event = Event::new("default", "e", "", "c", 0);
        event.check.metadata.annotations.insert(
            "sensu.io/plugins/google-chat/config/webhook".into(),
            String::new(),
        );

        let config = HandlerConfig::new("https://flag", "https://d").with_annotations(&event);
        assert_eq!(config.validate(), Err(ConfigError::MissingWebhook));
    }
}
