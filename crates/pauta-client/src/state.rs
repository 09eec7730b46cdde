//! Application state shared across all commands.
//!
//! The [`AppState`] struct is wrapped in `Arc<Mutex<>>` by the embedding
//! shell so that every command can access it.

use chrono::Utc;
use pauta_store::calendar::MonthCursor;
use pauta_store::{ContentStore, User};
use serde::{Deserialize, Serialize};

/// Which main view is active in the shell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Calendar,
    Board,
    Strategy,
}

/// Central application state.
///
/// Holds the content store, the session user, the selected post and the
/// runtime flags for modal visibility and in-flight generation requests.
pub struct AppState {
    /// Posts and the active client strategy.  Seeded from mock data.
    pub store: ContentStore,

    /// The signed-in user.  `None` gates every other view behind the
    /// login screen.
    pub current_user: Option<User>,

    /// Id of the post open in the detail panel, if any.  At most one
    /// post is selected at a time.
    pub selected_post_id: Option<String>,

    /// Active main view (calendar / board / strategy).
    pub active_view: View,

    /// Month currently shown by the calendar view.
    pub month_cursor: MonthCursor,

    /// Whether the user profile modal is open.
    pub is_profile_open: bool,

    /// A caption generation request is in flight; re-entry is rejected
    /// until it completes.
    pub is_generating_caption: bool,

    /// A strategy generation request is in flight.
    pub is_generating_strategy: bool,
}

impl AppState {
    /// Fresh session state, seeded with the mock content for today.
    pub fn new() -> Self {
        let today = Utc::now().date_naive();
        Self {
            store: ContentStore::seeded(today),
            current_user: None,
            selected_post_id: None,
            active_view: View::Calendar,
            month_cursor: MonthCursor::from_date(today),
            is_profile_open: false,
            is_generating_caption: false,
            is_generating_strategy: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
