//! Item registration from client-resolved file paths.

use crate::db::NewItem;
use crate::error::{Error, Result};
use crate::types::{ItemId, Status};

use super::MediaTracker;

impl MediaTracker {
    /// Register a newly fetched media file as a tracked item
    ///
    /// The path must already be resolved by the external fetch process; no
    /// existence check or deduplication is performed here, so repeated calls
    /// with the same path create independent items. The title defaults to the
    /// base name of the path when not supplied.
    ///
    /// Returns the newly assigned item identity; the item starts in
    /// `downloaded` and is immediately eligible for leasing.
    pub async fn fetch(&self, path: &str, title: Option<&str>) -> Result<ItemId> {
        if path.trim().is_empty() {
            return Err(Error::Validation("path must not be empty".to_string()));
        }

        let title = match title {
            Some(title) => title.to_string(),
            None => derive_title(path),
        };

        let id = self
            .db
            .insert_item(&NewItem {
                title,
                path: path.to_string(),
                status: Status::Downloaded,
            })
            .await?;

        tracing::info!(item_id = id.0, path, "Item registered");

        Ok(id)
    }
}

/// Base name of the path; falls back to the raw path string for paths with
/// no final component (e.g. trailing slash).
fn derive_title(path: &str) -> String {
    std::path::Path::new(path.trim())
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.trim().to_string())
}
