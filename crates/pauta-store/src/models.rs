//! Domain model structs held in the in-memory store.
//!
//! Every struct derives `Serialize` and `Deserialize` so it can be handed
//! directly to the UI layer over IPC.

use chrono::{DateTime, NaiveDate, Utc};
use pauta_shared::{CommentAuthor, PostFormat, PostStatus};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Post
// ---------------------------------------------------------------------------

/// A single piece of planned social-media content tracked through the
/// review workflow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    /// Unique post identifier.
    pub id: String,
    /// Short title shown on calendar and board cards.
    pub title: String,
    /// Publication day.  Serializes as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Media shape (static / reels / carousel).
    pub format: PostFormat,
    /// Position in the review workflow.
    pub status: PostStatus,
    /// Client name this post belongs to (a name reference, not a key).
    pub client: String,
    /// Caption text.  May be empty while the post is being drafted.
    pub caption: String,
    /// Optional reference to the creative asset.
    pub image_url: Option<String>,
    /// Review comments, in insertion order.  Append-only.
    pub comments: Vec<Comment>,
}

// ---------------------------------------------------------------------------
// Comment
// ---------------------------------------------------------------------------

/// A review comment on a post.  Immutable once created and owned
/// exclusively by its parent post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    /// Time-derived identifier, unique within the parent post.
    pub id: String,
    /// Role the comment is attributed to.
    pub author: CommentAuthor,
    /// Comment body.  Never blank.
    pub text: String,
    /// When the comment was written.
    pub timestamp: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Client strategy
// ---------------------------------------------------------------------------

/// Audience and voice brief for a client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Persona {
    /// Pains and challenges of the target audience.
    pub pains: String,
    /// What the client wants to achieve.
    pub goals: String,
    /// Tone of voice for generated content.
    pub tone: String,
}

/// Visual-identity brief for a client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VisualIdentity {
    /// Comma-separated color tokens (e.g. `#2563EB, #1E293B`).
    pub colors: String,
    /// Comma-separated font names.
    pub fonts: String,
    /// Moodboard / reference URL.
    pub inspiration_url: String,
}

/// The persona and visual-identity brief for one client, used to guide
/// content generation.  Exactly one instance is active per session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientStrategy {
    /// Unique strategy identifier.
    pub id: String,
    /// Client display name.
    pub name: String,
    /// Audience and voice brief.
    pub persona: Persona,
    /// Visual-identity brief.
    pub identity: VisualIdentity,
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// The signed-in user.  Created at login, discarded at logout; never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Team or company the user works for.
    pub team: String,
    /// Optional avatar image reference.
    pub avatar: Option<String>,
}
