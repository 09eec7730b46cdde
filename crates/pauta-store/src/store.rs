//! The central in-memory state container.

use crate::models::{ClientStrategy, Post};

/// In-memory collection of posts and the single active client strategy.
///
/// Mutations are synchronous and immediately visible to the projectors;
/// the store assumes a single logical actor (one UI session) and does no
/// locking of its own.
#[derive(Debug, Clone)]
pub struct ContentStore {
    pub(crate) posts: Vec<Post>,
    pub(crate) strategy: ClientStrategy,
}

impl ContentStore {
    /// Create an empty store for the given client strategy.
    pub fn new(strategy: ClientStrategy) -> Self {
        Self {
            posts: Vec::new(),
            strategy,
        }
    }
}
