//! Route handlers for the REST API
//!
//! Handlers are organized by domain:
//! - [`items`] — Item listing and mutation
//! - [`tasks`] — Item registration
//! - [`jobs`] — Worker-facing lease and commit endpoints
//! - [`config`] — Configuration
//! - [`search`] — Torrent-metadata search proxy
//! - [`system`] — Health and OpenAPI

use serde::{Deserialize, Serialize};

mod config;
mod items;
mod jobs;
mod search;
mod system;
mod tasks;

// Re-export all handlers so `routes::function_name` continues to work
pub use config::*;
pub use items::*;
pub use jobs::*;
pub use search::*;
pub use system::*;
pub use tasks::*;

// ============================================================================
// Query/Request Types (shared across handlers)
// ============================================================================

/// Request body for POST /tasks/fetch
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct FetchRequest {
    /// Path to the already-resolved source media file
    pub path: String,
    /// Display title; defaults to the base name of the path
    #[serde(default)]
    pub title: Option<String>,
}

/// Response body for POST /tasks/fetch
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct FetchResponse {
    /// Identity of the newly registered item
    pub id: crate::types::ItemId,
}

/// Response body for POST /jobs/:id/done
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CommitResponse {
    /// Stored artifact path, relative to the media root
    pub artifact_path: String,
}

/// Query parameters for GET /search
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct SearchQuery {
    /// Substring to match against torrent names
    pub q: Option<String>,
}
