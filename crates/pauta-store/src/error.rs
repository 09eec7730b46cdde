use thiserror::Error;

/// Errors produced by the store layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A batch insert contained an id that already exists (or appears
    /// twice in the batch).  The whole batch is rejected.
    #[error("Duplicate post id: {0}")]
    DuplicateId(String),

    /// A lookup expected exactly one post but found none.
    #[error("Post not found: {0}")]
    NotFound(String),

    /// A user-supplied value failed a local check.
    #[error("Validation error: {0}")]
    Validation(#[from] pauta_shared::ValidationError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
