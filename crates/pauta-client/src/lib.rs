//! # pauta-client
//!
//! Application layer of the Pauta content dashboard: the shared
//! [`state::AppState`] container, the UI-facing command functions, and
//! the external collaborators (generative text, calendar event source,
//! identity) behind swappable traits.
//!
//! Commands take the state as `&Arc<Mutex<AppState>>`, mutate it
//! synchronously, and hand camelCase DTOs back to the UI.  The only
//! asynchronous boundary is a collaborator call; the lock is never held
//! across an await.

pub mod collaborators;
pub mod commands;
pub mod config;
pub mod genai;
pub mod identity;
pub mod mock_events;
pub mod state;

use tracing_subscriber::{fmt, EnvFilter};

/// Initialise tracing for the client process.  `RUST_LOG` overrides the
/// per-crate defaults.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("pauta_client=debug,pauta_store=info,warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    tracing::info!("Starting Pauta dashboard client");
}
