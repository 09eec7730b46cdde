//! Detail-panel commands: selection, field edits, the approval workflow
//! and comment append for a single post.

use std::str::FromStr;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::info;

use pauta_shared::{CommentAuthor, PostFormat, PostStatus};
use pauta_store::{Comment, Post};

use crate::collaborators::TextGenerator;
use crate::genai::caption_prompt;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: String,
    pub author: String,
    pub text: String,
    pub timestamp: String,
}

impl From<Comment> for CommentDto {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id,
            author: c.author.as_str().to_string(),
            text: c.text,
            timestamp: c.timestamp.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: String,
    pub title: String,
    pub date: String,
    pub format: String,
    pub status: String,
    pub status_label: String,
    pub status_color: String,
    pub client: String,
    pub caption: String,
    pub image_url: Option<String>,
    pub comments: Vec<CommentDto>,
}

impl From<Post> for PostDto {
    fn from(p: Post) -> Self {
        Self {
            id: p.id,
            title: p.title,
            date: p.date.format("%Y-%m-%d").to_string(),
            format: p.format.as_str().to_string(),
            status: p.status.as_str().to_string(),
            status_label: p.status.label().to_string(),
            status_color: p.status.color_class().to_string(),
            client: p.client,
            caption: p.caption,
            image_url: p.image_url,
            comments: p.comments.into_iter().map(CommentDto::from).collect(),
        }
    }
}

/// Open a post in the detail panel.
pub fn select_post(state: &Arc<Mutex<AppState>>, post_id: &str) -> Result<PostDto, String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    let post = guard
        .store
        .get_post(post_id)
        .map_err(|e| format!("Failed to load post: {e}"))?
        .clone();
    guard.selected_post_id = Some(post.id.clone());
    Ok(post.into())
}

/// Close the detail panel.  Committed edits survive; only the selection
/// is cleared.
pub fn close_panel(state: &Arc<Mutex<AppState>>) -> Result<(), String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    guard.selected_post_id = None;
    Ok(())
}

/// Create a fresh draft post for the active client.
pub fn create_post(
    state: &Arc<Mutex<AppState>>,
    title: &str,
    date: &str,
    format: &str,
) -> Result<PostDto, String> {
    let date = date
        .parse()
        .map_err(|e| format!("Invalid date \"{date}\": {e}"))?;
    let format = PostFormat::from_str(format).map_err(|e| e.to_string())?;

    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    let post = guard.store.create_post(title, date, format);

    info!(post_id = %post.id, "Post created");
    Ok(post.into())
}

pub fn update_title(
    state: &Arc<Mutex<AppState>>,
    post_id: &str,
    title: &str,
) -> Result<(), String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    guard
        .store
        .set_title(post_id, title)
        .map_err(|e| format!("Failed to update title: {e}"))
}

pub fn update_caption(
    state: &Arc<Mutex<AppState>>,
    post_id: &str,
    caption: &str,
) -> Result<(), String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    guard
        .store
        .set_caption(post_id, caption)
        .map_err(|e| format!("Failed to update caption: {e}"))
}

pub fn update_media(
    state: &Arc<Mutex<AppState>>,
    post_id: &str,
    image_url: Option<String>,
) -> Result<(), String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    guard
        .store
        .set_image_url(post_id, image_url)
        .map_err(|e| format!("Failed to update media: {e}"))
}

/// Free-choice status selector.  Membership in the enumeration is the
/// only check; the workflow imposes no ordering rules.
pub fn set_post_status(
    state: &Arc<Mutex<AppState>>,
    post_id: &str,
    status: &str,
) -> Result<PostDto, String> {
    let status = PostStatus::from_str(status).map_err(|e| e.to_string())?;
    apply_status(state, post_id, status)
}

/// One-click approval shortcut.
pub fn approve(state: &Arc<Mutex<AppState>>, post_id: &str) -> Result<PostDto, String> {
    apply_status(state, post_id, PostStatus::Approved)
}

/// One-click "request adjustment" shortcut.
pub fn request_adjustment(state: &Arc<Mutex<AppState>>, post_id: &str) -> Result<PostDto, String> {
    apply_status(state, post_id, PostStatus::Adjust)
}

fn apply_status(
    state: &Arc<Mutex<AppState>>,
    post_id: &str,
    status: PostStatus,
) -> Result<PostDto, String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    guard
        .store
        .set_status(post_id, status)
        .map_err(|e| format!("Failed to change status: {e}"))?;

    info!(post_id = %post_id, status = %status, "Status changed");
    let post = guard
        .store
        .get_post(post_id)
        .map_err(|e| format!("Failed to load post: {e}"))?
        .clone();
    Ok(post.into())
}

/// Append a review comment, attributed to the reviewing client.  Blank
/// text is a silent no-op.
pub fn add_comment(
    state: &Arc<Mutex<AppState>>,
    post_id: &str,
    text: &str,
) -> Result<Option<CommentDto>, String> {
    if text.trim().is_empty() {
        return Ok(None);
    }

    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    let comment = guard
        .store
        .append_comment(post_id, CommentAuthor::Client, text)
        .map_err(|e| format!("Failed to add comment: {e}"))?;

    info!(post_id = %post_id, comment_id = %comment.id, "Comment added");
    Ok(Some(comment.into()))
}

/// Draft a caption for the post via the generative-text collaborator.
///
/// The in-flight flag rejects re-entry while a request is pending; on
/// failure the flag is cleared and the caption is left untouched.
pub async fn generate_caption(
    state: &Arc<Mutex<AppState>>,
    generator: &dyn TextGenerator,
    post_id: &str,
) -> Result<String, String> {
    let prompt = {
        let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
        if guard.is_generating_caption {
            return Err("Caption generation already in flight".to_string());
        }
        let post = guard
            .store
            .get_post(post_id)
            .map_err(|e| format!("Failed to load post: {e}"))?;
        let strategy = guard.store.strategy();
        let prompt = caption_prompt(&post.title, &strategy.name, &strategy.persona.tone, post.format);
        guard.is_generating_caption = true;
        prompt
    };

    let result = generator.generate(&prompt).await;

    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    guard.is_generating_caption = false;
    match result {
        Ok(text) => {
            guard
                .store
                .set_caption(post_id, &text)
                .map_err(|e| format!("Failed to store caption: {e}"))?;
            info!(post_id = %post_id, "Caption generated");
            Ok(text)
        }
        Err(e) => Err(format!("Caption generation failed: {e}")),
    }
}
