//! # seedbox-dl
//!
//! Backend library for seedbox media applications: tracks downloaded media
//! items and coordinates asynchronous preview-sprite generation by external
//! worker processes that poll for work.
//!
//! ## Design Philosophy
//!
//! seedbox-dl is designed to be:
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//! - **Sensible defaults** - Works out of the box with zero configuration
//! - **Worker-agnostic** - The sprite computation itself lives in an external
//!   worker; this crate owns the item lifecycle and the job-leasing protocol
//!
//! ## Quick Start
//!
//! ```no_run
//! use seedbox_dl::{Config, MediaTracker};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.api.auth_token = Some("shared-worker-token".to_string());
//!
//!     let tracker = Arc::new(MediaTracker::new(config).await?);
//!
//!     // Serve the REST API; workers poll POST /jobs/next for sprite work
//!     let api = tracker.spawn_api_server();
//!
//!     seedbox_dl::run_with_shutdown(&tracker).await?;
//!     api.abort();
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// REST API module
pub mod api;
/// Configuration types
pub mod config;
/// Database persistence layer
pub mod db;
/// Error types
pub mod error;
/// Core tracker implementation (decomposed into focused submodules)
pub mod tracker;
/// Core types
pub mod types;

// Re-export commonly used types
pub use config::{Config, ConfigUpdate};
pub use db::Database;
pub use error::{ApiError, DatabaseError, Error, ErrorDetail, ItemError, Result, ToHttpStatus};
pub use tracker::MediaTracker;
pub use types::{ItemId, ItemInfo, ItemPatch, LeasedJob, SearchResult, Status};

/// Helper function to run the tracker with graceful signal handling.
///
/// Waits for a termination signal and then calls the tracker's `shutdown()`
/// method.
///
/// - **Unix:** listens for SIGTERM and SIGINT, with fallbacks if signal registration fails.
/// - **Windows/other:** listens for Ctrl+C via `tokio::signal::ctrl_c()`.
pub async fn run_with_shutdown(tracker: &MediaTracker) -> Result<()> {
    wait_for_signal().await;
    tracker.shutdown().await
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    // Set up signal handlers - these may fail in restricted environments (containers, tests)
    let sigterm_result = signal(SignalKind::terminate());
    let sigint_result = signal(SignalKind::interrupt());

    match (sigterm_result, sigint_result) {
        (Ok(mut sigterm), Ok(mut sigint)) => {
            tokio::select! {
                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM signal");
                }
                _ = sigint.recv() => {
                    tracing::info!("Received SIGINT signal (Ctrl+C)");
                }
            }
        }
        (Err(e), _) => {
            tracing::warn!(error = %e, "Could not register SIGTERM handler, waiting for SIGINT only");
            if let Ok(mut sigint) = signal(SignalKind::interrupt()) {
                sigint.recv().await;
                tracing::info!("Received SIGINT signal (Ctrl+C)");
            } else {
                tracing::error!("Could not register any signal handlers, using ctrl_c fallback");
                tokio::signal::ctrl_c().await.ok();
            }
        }
        (_, Err(e)) => {
            tracing::warn!(error = %e, "Could not register SIGINT handler, waiting for SIGTERM only");
            if let Ok(mut sigterm) = signal(SignalKind::terminate()) {
                sigterm.recv().await;
                tracing::info!("Received SIGTERM signal");
            } else {
                tracing::error!("Could not register any signal handlers, using ctrl_c fallback");
                tokio::signal::ctrl_c().await.ok();
            }
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            tracing::info!("Received Ctrl+C signal");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C signal");
        }
    }
}
