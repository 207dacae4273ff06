use serde::{Deserialize, Serialize};

/// A text message posted to a Google Chat space through an incoming webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadMessage {
    pub text: String,
    pub thread: Thread,
}

/// Thread the message is posted into.
///
/// Messages carrying the same key are grouped into one conversation thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    #[serde(rename = "threadKey")]
    pub thread_key: String,
}

impl ThreadMessage {
    pub fn new(text: impl Into<String>, thread_key: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            thread: Thread {
                thread_key: thread_key.into(),
            },
        }
    }

    pub fn thread_key(&self) -> &str {
        &self.thread.thread_key
    }
}
