//! External collaborator boundaries.
//!
//! Each trait isolates a stand-in implementation (mock events, open
//! identity) or a network pass-through (generative text) so it can be
//! replaced without touching the commands that consume it.

use async_trait::async_trait;
use pauta_shared::{AuthError, CalendarEvent, ServiceError};
use pauta_store::User;

/// Generative-text service: a prompt in, generated text out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ServiceError>;
}

/// Calendar event source: resolves an opaque link into `(title, date)`
/// event pairs.  The link contents are never parsed here.
#[async_trait]
pub trait EventSource: Send + Sync {
    async fn fetch_events(&self, link: &str) -> Result<Vec<CalendarEvent>, ServiceError>;
}

/// Login credentials handed to the identity collaborator.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Email/password form login.
    Password {
        name: String,
        email: String,
        password: String,
        team: String,
    },
    /// OAuth-style delegation; only the team is asked for locally.
    Delegated { team: String },
}

/// Identity collaborator: turns credentials into a session [`User`].
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn authenticate(&self, credentials: Credentials) -> Result<User, AuthError>;
}
