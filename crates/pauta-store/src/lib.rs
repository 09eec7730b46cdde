//! # pauta-store
//!
//! In-memory content state for the Pauta dashboard: the post list and the
//! single active client strategy, with typed mutation helpers for every
//! user action, plus the two read-only projectors (calendar grid and
//! kanban board) derived from it.
//!
//! There is no durability by design: all state lives inside one UI
//! session and is seeded from mock data on startup.  The crate exposes a
//! synchronous [`ContentStore`] handle; the client layer is responsible
//! for wrapping it in a mutex.

pub mod board;
pub mod calendar;
pub mod import;
pub mod models;
pub mod posts;
pub mod seed;
pub mod store;
pub mod strategy;

mod error;

pub use error::{Result, StoreError};
pub use models::*;
pub use store::ContentStore;
