use google_chat_client::ThreadMessage;

use crate::dashboard::event_url;
use crate::event::Event;

/// Render the chat line for one check result.
///
/// Produces ``*`{status:<8}`* <{url}|{entity}/{check}>``. The thread key is the
/// entity, so every result for a host lands in the same Chat thread.
pub fn render(status: &str, url: &str, entity: &str, check: &str) -> ThreadMessage {
    let text = format!("*`{:<8}`* <{}|{}/{}>", status, url, entity, check);
    ThreadMessage::new(text, entity)
}

/// Render `event`, linking into `dashboard`.
pub fn render_event(event: &Event, dashboard: &str) -> ThreadMessage {
    let entity = event.resolved_entity();
    let check = event.check_name();
    let url = event_url(dashboard, event.namespace(), entity, check);

    render(event.status().label(), &url, entity, check)
}
