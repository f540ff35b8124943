//! Database layer for seedbox-dl
//!
//! Handles SQLite persistence for tracked media items.
//!
//! ## Submodules
//!
//! Methods on [`Database`] are organized by domain:
//! - [`migrations`] — Database lifecycle, schema migrations
//! - [`items`] — Item CRUD
//! - [`jobs`] — Atomic lease claim and artifact finalization

use crate::types::{ItemId, Status};
use sqlx::{FromRow, sqlite::SqlitePool};

mod items;
mod jobs;
mod migrations;

/// New item to be inserted into the database
#[derive(Debug, Clone)]
pub struct NewItem {
    /// Display title for this item
    pub title: String,
    /// Path to the source media file
    pub path: String,
    /// Initial lifecycle status
    pub status: Status,
}

/// Item record from database
#[derive(Debug, Clone, FromRow)]
pub struct Item {
    /// Unique database ID
    pub id: i64,
    /// Display title for this item
    pub title: String,
    /// Current lifecycle status
    pub status: Status,
    /// Path to the source media file; set once at creation
    pub path: String,
    /// Relative path to the generated sprite; NULL until ready
    pub artifact_path: Option<String>,
    /// Unix timestamp when the item was created
    pub created_at: i64,
    /// Unix timestamp of the last successful lease; NULL until first leased
    pub leased_at: Option<i64>,
}

/// Row returned by a successful lease claim
#[derive(Debug, Clone, FromRow)]
pub struct LeasedRow {
    /// The claimed item's ID
    pub id: ItemId,
    /// Path to the source media file
    pub path: String,
}

/// Database handle for seedbox-dl
pub struct Database {
    pool: SqlitePool,
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;
