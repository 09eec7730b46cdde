//! UI-facing commands.
//!
//! Every command takes the shared state as `&Arc<Mutex<AppState>>`,
//! returns `Result<T, String>` with user-presentable error messages, and
//! commits each mutation to the store immediately.

pub mod import;
pub mod posts;
pub mod session;
pub mod strategy;
pub mod views;
