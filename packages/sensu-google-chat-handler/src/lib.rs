//! Sensu handler that posts check results into a Google Chat space.
//!
//! Each event becomes one line of the form
//! ``*`WARNING `* <https://dashboard/ns/events/host/check|host/check>``,
//! threaded by entity so a host's history reads as one conversation.
//!
//! # Example
//!
//! ```rust,ignore
//! use sensu_google_chat_handler::{handle_event, Event, HandlerConfig};
//!
//! let config = HandlerConfig::new(webhook_url, "https://sensu.example.com");
//! let event: Event = serde_json::from_reader(std::io::stdin())?;
//!
//! handle_event(&config.with_annotations(&event), &event).await?;
//! ```

pub mod config;
pub mod dashboard;
pub mod error;
pub mod event;
pub mod handler;
pub mod message;
pub mod status;

pub use config::HandlerConfig;
pub use error::{ConfigError, ErrorKind, HandlerError, Result};
pub use event::Event;
pub use handler::{handle_event, Handler};
pub use status::{status_label, CheckStatus};
