//! Core tracker implementation split into focused submodules.
//!
//! The `MediaTracker` struct and its methods are organized by domain:
//! - [`fetch`] - Item registration from resolved file paths
//! - [`jobs`] - Job leasing and worker coordination
//! - [`artifacts`] - Sprite artifact commits
//! - [`items`] - Item listing and mutation
//! - [`search`] - Read-only torrent-metadata search proxy
//! - [`config_ops`] - Runtime configuration updates
//! - [`lifecycle`] - Shutdown coordination

mod artifacts;
mod config_ops;
mod fetch;
mod items;
mod jobs;
mod lifecycle;
mod search;

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
pub(crate) mod test_helpers;
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;

use crate::config::Config;
use crate::db::Database;
use crate::error::{Error, Result};

/// Runtime-mutable settings (separate from static config)
///
/// These hold the fields `PATCH /config` may change while the service runs;
/// everything else requires a restart.
#[derive(Clone)]
pub(crate) struct RuntimeSettings {
    /// Media content root for future artifact commits
    pub(crate) media_dir: std::sync::Arc<tokio::sync::RwLock<std::path::PathBuf>>,
    /// Advertised sprite worker address
    pub(crate) worker_addr: std::sync::Arc<tokio::sync::RwLock<String>>,
    /// Lease timeout in seconds (None = leases never expire)
    pub(crate) lease_timeout_secs: std::sync::Arc<tokio::sync::RwLock<Option<u64>>>,
}

/// Main tracker instance (cloneable - all fields are Arc-wrapped)
///
/// One instance is constructed at startup and shared by reference with every
/// request handler; tests construct isolated instances over temporary
/// directories.
#[derive(Clone)]
pub struct MediaTracker {
    /// Database instance for persistence (wrapped in Arc for sharing across tasks)
    /// Public for integration tests to query item status
    pub db: std::sync::Arc<Database>,
    /// Configuration (wrapped in Arc for sharing across tasks)
    pub(crate) config: std::sync::Arc<Config>,
    /// Runtime-mutable settings
    pub(crate) runtime: RuntimeSettings,
    /// Read-only pool against the external torrent-metadata database
    /// (None = search disabled)
    pub(crate) search_pool: Option<sqlx::PgPool>,
}

impl MediaTracker {
    /// Create a new MediaTracker instance
    ///
    /// This initializes all core components:
    /// - Creates the media content root
    /// - Opens/creates the SQLite item database and runs migrations
    /// - Connects (lazily) to the torrent-metadata database when configured
    pub async fn new(config: Config) -> Result<Self> {
        // Ensure the media root exists
        tokio::fs::create_dir_all(&config.storage.media_dir)
            .await
            .map_err(|e| {
                Error::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create media directory '{}': {}",
                        config.storage.media_dir.display(),
                        e
                    ),
                ))
            })?;

        // Initialize the item database
        let db = Database::new(&config.storage.database_path).await?;

        // The search database is an optional external collaborator; failure to
        // set up the pool degrades search, never startup.
        let search_pool = match &config.search.database_url {
            Some(url) => match sqlx::postgres::PgPoolOptions::new()
                .max_connections(5)
                .connect_lazy(url)
            {
                Ok(pool) => Some(pool),
                Err(e) => {
                    tracing::warn!(error = %e, "Search database unavailable, search disabled");
                    None
                }
            },
            None => None,
        };

        let runtime = RuntimeSettings {
            media_dir: std::sync::Arc::new(tokio::sync::RwLock::new(
                config.storage.media_dir.clone(),
            )),
            worker_addr: std::sync::Arc::new(tokio::sync::RwLock::new(
                config.jobs.worker_addr.clone(),
            )),
            lease_timeout_secs: std::sync::Arc::new(tokio::sync::RwLock::new(
                config.jobs.lease_timeout_secs,
            )),
        };

        Ok(Self {
            db: std::sync::Arc::new(db),
            config: std::sync::Arc::new(config),
            runtime,
            search_pool,
        })
    }

    /// Get the static configuration the tracker was constructed with
    ///
    /// Runtime-changeable fields may have drifted from this snapshot; use
    /// [`MediaTracker::current_config`] for the merged view.
    pub fn get_config(&self) -> std::sync::Arc<Config> {
        std::sync::Arc::clone(&self.config)
    }

    /// Spawn the REST API server in a background task
    ///
    /// The server runs concurrently with job coordination and listens on the
    /// configured bind address (default: 127.0.0.1:28000).
    pub fn spawn_api_server(self: &std::sync::Arc<Self>) -> tokio::task::JoinHandle<Result<()>> {
        let tracker = self.clone();
        let config = self.config.clone();

        tokio::spawn(async move { crate::api::start_api_server(tracker, config).await })
    }
}
