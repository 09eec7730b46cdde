use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Media shape of a post.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PostFormat {
    /// Single static image.
    Static,
    /// Short-form video.
    Reels,
    /// Multi-image carousel.
    Carousel,
}

impl PostFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            PostFormat::Static => "static",
            PostFormat::Reels => "reels",
            PostFormat::Carousel => "carousel",
        }
    }

    /// Badge label shown on board cards.
    pub fn label(self) -> &'static str {
        match self {
            PostFormat::Static => "Estático",
            PostFormat::Reels => "Reels",
            PostFormat::Carousel => "Carrossel",
        }
    }
}

impl std::str::FromStr for PostFormat {
    type Err = crate::error::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "static" => Ok(PostFormat::Static),
            "reels" => Ok(PostFormat::Reels),
            "carousel" => Ok(PostFormat::Carousel),
            other => Err(crate::error::ValidationError::UnknownFormat(
                other.to_string(),
            )),
        }
    }
}

impl std::fmt::Display for PostFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Role a comment is attributed to.  A closed set, not a user reference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CommentAuthor {
    System,
    Client,
    Manager,
}

impl CommentAuthor {
    pub fn as_str(self) -> &'static str {
        match self {
            CommentAuthor::System => "System",
            CommentAuthor::Client => "Client",
            CommentAuthor::Manager => "Manager",
        }
    }
}

impl std::fmt::Display for CommentAuthor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One event returned by a calendar event source: a title and the day the
/// event takes place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarEvent {
    pub title: String,
    pub date: NaiveDate,
}
