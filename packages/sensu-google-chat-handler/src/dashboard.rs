//! Deep links into the Sensu web dashboard.
//!
//! Segments are inserted as-is. A check name containing `/` therefore adds
//! path levels to the link; nothing here escapes or validates segment text.

/// Join `segments` onto `base` with exactly one `/` between each part.
///
/// Trailing slashes on `base` are dropped first, so `https://x` and
/// `https://x//` produce the same URL.
pub fn join_url<S: AsRef<str>>(base: &str, segments: &[S]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        url.push('/');
        url.push_str(segment.as_ref());
    }
    url
}

/// Link to a single event: `{dashboard}/{namespace}/events/{entity}/{check}`.
pub fn event_url(dashboard: &str, namespace: &str, entity: &str, check: &str) -> String {
    join_url(dashboard, &[namespace, "events", entity, check])
}
