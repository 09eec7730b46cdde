//! Calendar import: resolve an opaque link through the event-source
//! collaborator and append the derived draft posts as one atomic batch.

use std::sync::{Arc, Mutex};

use tracing::info;

use pauta_store::import::drafts_from_events;

use crate::collaborators::EventSource;
use crate::state::AppState;

/// Import events from `link` and create one draft post per event, dated
/// two days ahead of it.  The batch is rejected as a whole if any id
/// collides with existing posts.  Returns the number of posts created.
pub async fn import_calendar(
    state: &Arc<Mutex<AppState>>,
    source: &dyn EventSource,
    link: &str,
) -> Result<usize, String> {
    if link.trim().is_empty() {
        return Err("Calendar link is empty".to_string());
    }

    let client = {
        let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
        guard.store.strategy().name.clone()
    };

    let events = source
        .fetch_events(link)
        .await
        .map_err(|e| format!("Calendar import failed: {e}"))?;
    let drafts = drafts_from_events(&events, &client);

    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    let count = guard
        .store
        .append_posts(drafts)
        .map_err(|e| format!("Calendar import rejected: {e}"))?;

    info!(count, link = %link, "Calendar imported");
    Ok(count)
}
