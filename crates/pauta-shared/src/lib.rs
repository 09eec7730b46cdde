//! # pauta-shared
//!
//! Closed enumerations, collaborator boundary types and the shared error
//! hierarchy used by every Pauta crate.  Everything here is plain data:
//! no I/O, no state.

pub mod error;
pub mod status;
pub mod types;

pub use error::{AuthError, ServiceError, ValidationError};
pub use status::PostStatus;
pub use types::{CalendarEvent, CommentAuthor, PostFormat};
