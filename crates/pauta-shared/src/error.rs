use thiserror::Error;

/// A user-supplied value failed a local check.  Always recoverable; the
/// triggering action becomes a no-op or a blocking prompt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Comment text is empty")]
    BlankComment,

    #[error("Required field is empty: {0}")]
    MissingField(&'static str),

    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    #[error("Unknown format: {0}")]
    UnknownFormat(String),
}

/// The identity collaborator rejected the credentials.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Required login field is empty: {0}")]
    MissingField(&'static str),

    #[error("Login rejected: {0}")]
    Rejected(String),
}

/// A call to an external collaborator (generative text, event source)
/// failed.  Never fatal: state is left unchanged and the user may retry
/// the triggering action.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("No API key configured")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Service responded with status {0}")]
    Status(u16),

    #[error("Malformed service response: {0}")]
    MalformedResponse(String),
}
