//! Typed post helpers on [`ContentStore`].

use chrono::{DateTime, NaiveDate, Utc};
use pauta_shared::{CommentAuthor, PostFormat, PostStatus, ValidationError};
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::models::{Comment, Post};
use crate::store::ContentStore;

impl ContentStore {
    /// All posts, in insertion order.
    pub fn list_posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get_post(&self, id: &str) -> Result<&Post> {
        self.posts
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn get_post_mut(&mut self, id: &str) -> Result<&mut Post> {
        self.posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Replace the post with a matching id, or insert it at the end if no
    /// post has that id yet.
    pub fn upsert_post(&mut self, post: Post) {
        match self.posts.iter_mut().find(|p| p.id == post.id) {
            Some(existing) => *existing = post,
            None => self.posts.push(post),
        }
    }

    /// Bulk insert.  Ids must be unique across the merged set and within
    /// the batch itself; on any collision the whole batch is rejected and
    /// the store is left unchanged.
    pub fn append_posts(&mut self, batch: Vec<Post>) -> Result<usize> {
        for (i, post) in batch.iter().enumerate() {
            if self.posts.iter().any(|p| p.id == post.id)
                || batch[..i].iter().any(|p| p.id == post.id)
            {
                return Err(StoreError::DuplicateId(post.id.clone()));
            }
        }
        let inserted = batch.len();
        self.posts.extend(batch);
        Ok(inserted)
    }

    /// Create a fresh draft post for the active client and insert it.
    /// Returns a clone of the stored post.
    pub fn create_post(&mut self, title: &str, date: NaiveDate, format: PostFormat) -> Post {
        let post = Post {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            date,
            format,
            status: PostStatus::Draft,
            client: self.strategy.name.clone(),
            caption: String::new(),
            image_url: None,
            comments: Vec::new(),
        };
        self.posts.push(post.clone());
        post
    }

    /// Move a post to a new workflow status.  The workflow is permissive:
    /// any of the six statuses is accepted regardless of the current one.
    pub fn set_status(&mut self, id: &str, status: PostStatus) -> Result<()> {
        self.get_post_mut(id)?.status = status;
        Ok(())
    }

    pub fn set_title(&mut self, id: &str, title: &str) -> Result<()> {
        self.get_post_mut(id)?.title = title.to_string();
        Ok(())
    }

    pub fn set_caption(&mut self, id: &str, caption: &str) -> Result<()> {
        self.get_post_mut(id)?.caption = caption.to_string();
        Ok(())
    }

    pub fn set_image_url(&mut self, id: &str, image_url: Option<String>) -> Result<()> {
        self.get_post_mut(id)?.image_url = image_url;
        Ok(())
    }

    /// Append a comment to a post.  Blank / whitespace-only text is
    /// rejected; otherwise the comment gets a time-derived id (unique
    /// within the post) and the current timestamp, and lands at the end
    /// of the sequence.
    pub fn append_comment(
        &mut self,
        id: &str,
        author: CommentAuthor,
        text: &str,
    ) -> Result<Comment> {
        if text.trim().is_empty() {
            return Err(ValidationError::BlankComment.into());
        }
        let now = Utc::now();
        let post = self.get_post_mut(id)?;
        let comment = Comment {
            id: comment_id(&post.comments, now),
            author,
            text: text.to_string(),
            timestamp: now,
        };
        post.comments.push(comment.clone());
        Ok(comment)
    }
}

/// Millisecond-timestamp comment id, suffixed when two comments land in
/// the same millisecond.
fn comment_id(existing: &[Comment], now: DateTime<Utc>) -> String {
    let base = now.timestamp_millis().to_string();
    if !existing.iter().any(|c| c.id == base) {
        return base;
    }
    let mut n = 1u32;
    loop {
        let candidate = format!("{base}-{n}");
        if !existing.iter().any(|c| c.id == candidate) {
            return candidate;
        }
        n += 1;
    }
}
